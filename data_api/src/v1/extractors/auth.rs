//! Authenticated-user extractor. Identity is delegated to the external
//! auth service sitting in front of this API; it forwards the verified
//! user id in a header, and the role comes from the `user_roles` table.

use crate::state::AppState;
use crate::v1::db::queries;
use crate::v1::error::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shared::domain::UserRole;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";

pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::AuthRequired)?;
        let user_id = header.parse::<Uuid>().map_err(|_| ApiError::AuthRequired)?;

        let role = queries::fetch_user_role(&state.db.pool, user_id)
            .await?
            .ok_or(ApiError::NotAuthorized)?;

        Ok(Self { user_id, role })
    }
}
