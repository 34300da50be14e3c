use crate::state::AppState;
use crate::v1::error::ErrorMessage;
use crate::v1::handlers::links::{create_link, export_links, get_link, list_links, update_link};
use crate::v1::handlers::stations::{
    create_station, export_stations, get_station, list_stations,
};
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/export", get(export_stations))
        .route("/stations/{id}", get(get_station))
        .route("/links", get(list_links).post(create_link))
        .route("/links/export", get(export_links))
        .route("/links/{id}", get(get_link).put(update_link))
}

pub async fn not_found() -> impl IntoResponse {
    ErrorMessage::from((StatusCode::NOT_FOUND, "no such route"))
}
