// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Review entity, DTOs and repository trait.
//!
//! A review belongs to exactly one movie through `movie_id`. The movie id
//! comes from the request path, so it is not part of
//! [`CreateReviewRequest`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Repository, SortDirection};

/// A user-submitted rating and comment attached to one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Primary key, UUIDv7.
    pub id:         Uuid,
    /// Rating, `1..=5`.
    pub rating:     i32,
    /// Review text.
    pub comment:    String,
    /// Display name of the reviewer.
    pub user_name:  String,
    /// Owning movie.
    pub movie_id:   Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>
}

impl Review {
    /// Build a new review for `movie_id` with a fresh id and the current time.
    pub fn new(movie_id: Uuid, dto: CreateReviewRequest) -> Self {
        Self {
            id: Uuid::now_v7(),
            rating: dto.rating,
            comment: dto.comment,
            user_name: dto.user_name,
            movie_id,
            created_at: Utc::now()
        }
    }
}

/// Request DTO for creating a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct CreateReviewRequest {
    /// Rating from 1 (terrible) to 5 (excellent).
    #[cfg_attr(feature = "api", schema(example = 5, minimum = 1, maximum = 5))]
    #[cfg_attr(
        feature = "validate",
        validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))
    )]
    pub rating: i32,

    /// Review text.
    #[cfg_attr(feature = "api", schema(example = "Mind-bending.", min_length = 1))]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "comment must not be empty"))
    )]
    pub comment: String,

    /// Display name of the reviewer.
    #[cfg_attr(feature = "api", schema(example = "alice", min_length = 1))]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "userName must not be empty"))
    )]
    pub user_name: String
}

/// Response DTO for API output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct ReviewResponse {
    /// Review unique identifier.
    pub id:         Uuid,
    /// Rating, `1..=5`.
    pub rating:     i32,
    /// Review text.
    pub comment:    String,
    /// Display name of the reviewer.
    pub user_name:  String,
    /// Owning movie.
    pub movie_id:   Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id:         review.id,
            rating:     review.rating,
            comment:    review.comment,
            user_name:  review.user_name,
            movie_id:   review.movie_id,
            created_at: review.created_at
        }
    }
}

/// Repository for the `reviews` table.
#[async_trait]
pub trait ReviewRepository: Repository {
    /// Insert a review for `movie_id`.
    async fn create(
        &self,
        movie_id: Uuid,
        dto: CreateReviewRequest
    ) -> Result<Review, Self::Error>;

    /// Find a review by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, Self::Error>;

    /// List reviews of a movie ordered by creation time.
    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        order: SortDirection
    ) -> Result<Vec<Review>, Self::Error>;

    /// Delete a review.
    ///
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, Self::Error>;
}
