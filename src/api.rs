// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP layer: handlers, router and OpenAPI document.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`ui::index`] |
//! | GET | `/app.js`, `/app.css` | [`ui::script`], [`ui::stylesheet`] |
//! | POST, GET | `/movies` | [`movies::create_movie`], [`movies::list_movies`] |
//! | GET, PUT, DELETE | `/movies/{id}` | [`movies::get_movie`], [`movies::update_movie`], [`movies::delete_movie`] |
//! | POST | `/reviews/{movieId}` | [`reviews::create_review`] |
//! | GET | `/reviews/movie/{movieId}` | [`reviews::list_reviews`] |
//! | GET, DELETE | `/reviews/{id}` | [`reviews::get_review`], [`reviews::delete_review`] |
//! | GET | `/api/docs` | Swagger UI |
//! | GET | `/api/docs-json` | OpenAPI document |
//!
//! `POST /reviews/{movieId}` and `GET /reviews/{id}` share one route; the
//! single path segment is a movie id for POST and a review id otherwise.

pub mod movies;
pub mod openapi;
pub mod reviews;
pub mod ui;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use self::openapi::ApiDoc;
use crate::{
    service::{MovieService, ReviewService},
    store::Store
};

/// Path of the Swagger UI.
pub const DOCS_PATH: &str = "/api/docs";

/// Path of the OpenAPI JSON document.
pub const DOCS_JSON_PATH: &str = "/api/docs-json";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Movie operations.
    pub movies:  MovieService<Store>,
    /// Review operations.
    pub reviews: ReviewService<Store, Store>
}

impl AppState {
    /// Build services on top of one store.
    pub fn new(store: Store) -> Self {
        let store = Arc::new(store);
        let movies = MovieService::new(Arc::clone(&store));
        Self {
            reviews: ReviewService::new(store, movies.clone()),
            movies
        }
    }
}

/// Build the application router.
///
/// # Usage
///
/// ```rust,ignore
/// let store = Store::open("sqlite::memory:").await?;
/// let app = router(AppState::new(store));
/// axum::serve(listener, app).await?;
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/app.js", get(ui::script))
        .route("/app.css", get(ui::stylesheet))
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie)
        )
        .route("/reviews/movie/{movieId}", get(reviews::list_reviews))
        .route(
            "/reviews/{id}",
            get(reviews::get_review)
                .post(reviews::create_review)
                .delete(reviews::delete_review)
        )
        .merge(SwaggerUi::new(DOCS_PATH).url(DOCS_JSON_PATH, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
