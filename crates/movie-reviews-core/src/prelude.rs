// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use movie_reviews_core::prelude::*;
//! ```

pub use crate::{
    CreateMovieRequest, CreateReviewRequest, Movie, MovieRepository, MovieResponse,
    MovieWithReviews, Repository, Review, ReviewRepository, ReviewResponse, SortDirection,
    UpdateMovieRequest, async_trait, average_rating
};
