#![deny(
    clippy::as_conversions,
    clippy::expect_used,
    clippy::future_not_send,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::pedantic,
    clippy::string_slice,
    clippy::todo,
    clippy::unwrap_used,
    unsafe_code
)]
#![allow(
    clippy::manual_non_exhaustive,
    clippy::missing_errors_doc,
    clippy::module_inception,
    clippy::module_name_repetitions,
    clippy::needless_return,
    clippy::single_match_else,
    clippy::multiple_crate_versions
)]

use std::io;

use axum::Router;
use sqlx::SqlitePool;
use tower_sessions::{Expiry, SessionManagerLayer, cookie::time::Duration};
use tower_sessions_sqlx_store::SqliteStore;

use crate::state::AppState;

pub use args::CampusArgs;
pub use models::{Course, User};
pub use module::{CurrentCourse, Module};

mod args;
pub mod auth;
mod models;
mod module;
pub mod modules;
mod state;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub async fn server(args: CampusArgs) -> Result<Router, io::Error> {
    let db_pool = SqlitePool::connect(&args.database_url)
        .await
        .map_err(io::Error::other)?;

    MIGRATOR.run(&db_pool).await.map_err(io::Error::other)?;

    router(db_pool, args).await
}

pub async fn router(db_pool: SqlitePool, config: CampusArgs) -> Result<Router, io::Error> {
    let session_store = SqliteStore::new(db_pool.clone());
    session_store.migrate().await.map_err(io::Error::other)?;
    let session_layer = SessionManagerLayer::new(session_store)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    let state = AppState { db_pool, config };

    let hello = modules::hello::register_module();
    tracing::info!(
        module = hello.name(),
        description = hello.description(),
        "mounting module"
    );

    let router = Router::new()
        .merge(auth::auth_router())
        .merge(hello.into_router())
        .layer(session_layer)
        .with_state(state);

    Ok(router)
}
