#![deny(
    clippy::expect_used,
    clippy::future_not_send,
    clippy::pedantic,
    clippy::as_conversions,
    clippy::unwrap_used,
    unsafe_code
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

use std::io;

use campus_hello::{CampusArgs, server};
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = CampusArgs::parse();

    let listener = TcpListener::bind(format!("127.0.0.1:{}", args.port))
        .await
        .map_err(io::Error::other)?;

    let port = args.port;
    let app = server(args).await?;

    tracing::info!(port, "listening");

    axum::serve(listener, app).await
}
