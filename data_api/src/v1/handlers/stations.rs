use crate::v1::api_models::StationPayload;
use crate::v1::db::queries;
use crate::v1::error::ApiError;
use crate::v1::extractors::auth::AuthUser;
use crate::v1::report;
use crate::v1::validate;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::{Pool, Postgres};
use tracing::info;
use uuid::Uuid;

/// List view source: every station, newest first.
pub async fn list_stations(
    State(pool): State<Pool<Postgres>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = queries::fetch_stations(&pool).await?;
    Ok(Json(rows))
}

/// Edit-form prefill for a single station.
pub async fn get_station(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = queries::fetch_station(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(row))
}

pub async fn create_station(
    State(pool): State<Pool<Postgres>>,
    user: AuthUser,
    Json(payload): Json<StationPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate::station(&payload).map_err(ApiError::Validation)?;
    let row = queries::insert_station(&pool, &payload).await?;
    info!(station = %row.id, user = %user.user_id, role = ?user.role, "station registered");
    Ok((StatusCode::CREATED, Json(row)))
}

/// CSV export of the currently registered stations.
pub async fn export_stations(
    State(pool): State<Pool<Postgres>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = queries::fetch_stations(&pool).await?;
    let body = report::stations_csv(&rows)?;
    Ok(report::csv_download("estacoes", body))
}
