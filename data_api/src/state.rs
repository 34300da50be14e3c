use axum::extract::FromRef;
use sqlx::{Pool, Postgres};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Db,
}

#[derive(Clone)]
pub struct Db {
    pub pool: Pool<Postgres>,
}

impl FromRef<AppState> for Pool<Postgres> {
    fn from_ref(state: &AppState) -> Self {
        state.db.pool.clone()
    }
}
