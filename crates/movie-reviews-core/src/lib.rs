// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for the movie reviews service.
//!
//! This crate holds everything that does not depend on a concrete database:
//! entities, request/response DTOs, repository traits and the average
//! rating computation. The root `movie-reviews` crate implements the
//! repositories on top of SQLite and exposes them over HTTP.
//!
//! # Overview
//!
//! - [`Repository`] — Base trait for every repository
//! - [`SortDirection`] — Ordering for list operations
//! - [`movie`] — `Movie` entity, DTOs and [`MovieRepository`]
//! - [`review`] — `Review` entity, DTOs and [`ReviewRepository`]
//! - [`rating`] — Average rating computation
//! - [`prelude`] — Convenient re-exports
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `api` | Derives `utoipa::ToSchema` on DTOs |
//! | `validate` | Derives `validator::Validate` on request DTOs |
//!
//! # Usage
//!
//! ```rust,ignore
//! use movie_reviews_core::prelude::*;
//!
//! #[async_trait]
//! impl MovieRepository for MyStore {
//!     async fn create(&self, dto: CreateMovieRequest) -> Result<Movie, Self::Error> {
//!         // ...
//!     }
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod movie;
pub mod prelude;
pub mod rating;
pub mod review;

/// Re-export async_trait for repository implementations.
pub use async_trait::async_trait;

pub use crate::{
    movie::{
        CreateMovieRequest, Movie, MovieRepository, MovieResponse, MovieWithReviews,
        UpdateMovieRequest
    },
    rating::average_rating,
    review::{CreateReviewRequest, Review, ReviewRepository, ReviewResponse}
};

/// Base repository trait.
///
/// [`MovieRepository`] and [`ReviewRepository`] both extend it, so a single
/// store type shares one error type and one pool across entities.
///
/// # Associated Types
///
/// - `Error` — Error type for repository operations
/// - `Pool` — Underlying database pool type
pub trait Repository: Send + Sync {
    /// Error type for repository operations.
    ///
    /// Must implement `std::error::Error + Send + Sync` for async
    /// compatibility.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Underlying database pool type.
    ///
    /// Enables access to the pool for schema management and custom queries.
    type Pool;

    /// Get reference to the underlying database pool.
    fn pool(&self) -> &Self::Pool;
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (oldest first).
    #[default]
    Asc,

    /// Descending order (newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}
