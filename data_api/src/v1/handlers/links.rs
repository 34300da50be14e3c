use crate::v1::api_models::LinkPayload;
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

/// List view source: every link joined with the numbers of its two
/// stations, newest first.
pub async fn list_links(
    State(pool): State<Pool<Postgres>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = queries::fetch_links_with_stations(&pool).await?;
    Ok(Json(rows))
}

/// Edit-form prefill for a single link, including its stored geometry.
pub async fn get_link(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = queries::fetch_link(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(row))
}

pub async fn create_link(
    State(pool): State<Pool<Postgres>>,
    user: AuthUser,
    Json(payload): Json<LinkPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate::link(&payload).map_err(ApiError::Validation)?;
    let record = payload.into_record()?;
    let row = queries::insert_link(&pool, &record).await?;
    info!(link = %row.id, user = %user.user_id, role = ?user.role, "link registered");
    Ok((StatusCode::CREATED, Json(row)))
}

/// Patches the link with the given id; a missing id is a 404, never an
/// insert.
pub async fn update_link(
    State(pool): State<Pool<Postgres>>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<LinkPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate::link(&payload).map_err(ApiError::Validation)?;
    let record = payload.into_record()?;
    let row = queries::update_link(&pool, id, &record)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(link = %id, user = %user.user_id, role = ?user.role, "link updated");
    Ok(Json(row))
}

/// CSV export of the loaded link report rows.
pub async fn export_links(
    State(pool): State<Pool<Postgres>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = queries::fetch_links_with_stations(&pool).await?;
    let body = report::links_csv(&rows)?;
    Ok(report::csv_download("enlaces", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::api_models::StationPayload;
    use crate::v1::db::models::StationRow;
    use shared::domain::UserRole;
    use sqlx::PgPool;

    async fn seed_station(pool: &PgPool, numestacao: &str) -> StationRow {
        let payload = StationPayload {
            cnpj: "12345678901234".into(),
            ano: "2024".into(),
            numestacao: numestacao.into(),
            lat: "-15.78".into(),
            long: "-47.93".into(),
            cod_ibge: "5300108".into(),
            endereco: "Rua X".into(),
            abertura: "2024-01-01".into(),
        };
        queries::insert_station(pool, &payload).await.unwrap()
    }

    fn link_payload(a: Uuid, b: Uuid, enlace_id: &str) -> LinkPayload {
        LinkPayload {
            cnpj: "12345678901234".into(),
            ano: "2024".into(),
            estacao_a_id: a.to_string(),
            estacao_b_id: b.to_string(),
            enlace_id: enlace_id.into(),
            meio: "FIBRA".into(),
            c_nominal: "10G".into(),
            swap: "N".into(),
            geometria_wkt: "LINESTRING(0 0,1 1)".into(),
            geometria_wkt_drawn: None,
            srid: "4326".into(),
        }
    }

    async fn link_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM links;")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../shared/migrations")]
    async fn updating_an_unknown_link_is_not_found_and_inserts_nothing(pool: PgPool) {
        let a = seed_station(&pool, "ST1").await;
        let b = seed_station(&pool, "ST2").await;
        let existing = link_payload(a.id, b.id, "ENL-1").into_record().unwrap();
        queries::insert_link(&pool, &existing).await.unwrap();

        let user = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::User,
        };
        let result = update_link(
            State(pool.clone()),
            user,
            Path(Uuid::new_v4()),
            Json(link_payload(a.id, b.id, "ENL-1")),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound)));
        assert_eq!(link_count(&pool).await, 1);
    }

    #[sqlx::test(migrations = "../shared/migrations")]
    async fn update_patches_only_the_addressed_link(pool: PgPool) {
        let a = seed_station(&pool, "ST1").await;
        let b = seed_station(&pool, "ST2").await;
        let first = queries::insert_link(
            &pool,
            &link_payload(a.id, b.id, "ENL-1").into_record().unwrap(),
        )
        .await
        .unwrap();
        let second = queries::insert_link(
            &pool,
            &link_payload(a.id, b.id, "ENL-2").into_record().unwrap(),
        )
        .await
        .unwrap();

        let mut changed = link_payload(a.id, b.id, "ENL-1-v2");
        changed.meio = "RADIO".into();
        let record = changed.into_record().unwrap();
        let updated = queries::update_link(&pool, first.id, &record)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.enlace_id, "ENL-1-v2");
        assert_eq!(updated.meio, "RADIO");

        let untouched = queries::fetch_link(&pool, second.id).await.unwrap().unwrap();
        assert_eq!(untouched.enlace_id, "ENL-2");
        assert_eq!(untouched.meio, "FIBRA");
        assert_eq!(link_count(&pool).await, 2);
    }
}
