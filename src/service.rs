// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Business operations on movies and reviews.
//!
//! Services validate input, call the repositories and keep each movie's
//! average rating in sync with its reviews. They are generic over the
//! repository traits, so any store implementing them can back the API.
//!
//! ```text
//! Handler ──> ReviewService ──> ReviewRepository
//!                   │
//!                   └────────> MovieService ──> MovieRepository
//! ```
//!
//! Recomputing the average after a review write is a second, separate
//! statement. A crash between the two leaves a stale average until the
//! next review change for that movie.

mod movie;
mod review;

pub use movie::MovieService;
pub use review::ReviewService;

/// Result alias for service operations over repository `R`.
pub type ServiceResult<T, R> =
    Result<T, crate::error::ServiceError<<R as movie_reviews_core::Repository>::Error>>;
