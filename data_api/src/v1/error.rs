use crate::v1::db::queries::QueryError;
use crate::v1::validate::FieldError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
}

/// Validation failures carry the per-field messages so the form can render
/// them inline next to the offending inputs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    AuthRequired,
    #[error("user has no assigned role")]
    NotAuthorized,
    #[error("record not found")]
    NotFound,
    #[error("{0} is not a valid station reference")]
    InvalidReference(&'static str),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthRequired => {
                ErrorMessage::from((StatusCode::UNAUTHORIZED, "authentication required"))
                    .into_response()
            }
            ApiError::NotAuthorized => {
                ErrorMessage::from((StatusCode::FORBIDDEN, "user has no assigned role"))
                    .into_response()
            }
            ApiError::NotFound => {
                ErrorMessage::from((StatusCode::NOT_FOUND, "record not found")).into_response()
            }
            ApiError::InvalidReference(field) => {
                warn!(field = field, "station reference is not a valid id");
                ErrorMessage::from((
                    StatusCode::BAD_REQUEST,
                    format!("{field} is not a valid station reference"),
                ))
                .into_response()
            }
            ApiError::Validation(errors) => ValidationErrors {
                status_code: StatusCode::UNPROCESSABLE_ENTITY,
                message: "validation failed".into(),
                errors,
            }
            .into_response(),
            ApiError::Query(e) => {
                warn!(error = ?e, "query failed");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
                    .into_response()
            }
            ApiError::Csv(e) => {
                warn!(error = ?e, "csv export failed");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
                    .into_response()
            }
        }
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
