use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::CampusArgs;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: CampusArgs,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}
