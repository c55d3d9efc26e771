// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # movie-reviews
//!
//! CRUD web service for movies and their reviews, with a browser client.
//!
//! Each movie keeps an average rating that is recomputed whenever one of
//! its reviews is created or deleted.
//!
//! ## Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | axum handlers, router, OpenAPI document, static client |
//! | [`service`] | Validation, not-found checks, rating refresh |
//! | [`store`] | SQLite repositories over sqlx |
//! | [`config`] | Environment configuration |
//! | [`telemetry`] | Tracing subscriber |
//! | [`error`] | Service and startup errors |
//!
//! Entities, DTOs and repository traits live in `movie-reviews-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let config = Config::from_env()?;
//! telemetry::init(&config.log_filter);
//! movie_reviews::serve(config).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod telemetry;

pub use crate::{
    api::{AppState, router},
    config::Config,
    error::{ServerError, ServiceError},
    store::Store
};

/// Open the store, bind the listener and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let store = Store::open(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let app = router(AppState::new(store.clone()));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    tracing::info!(%addr, "listening");
    tracing::info!(docs = %format!("http://{addr}{}", api::DOCS_PATH), "API documentation");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
