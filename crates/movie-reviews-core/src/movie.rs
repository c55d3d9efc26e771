// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Movie entity, DTOs and repository trait.
//!
//! # Types
//!
//! | Type | Purpose | Direction |
//! |------|---------|-----------|
//! | [`CreateMovieRequest`] | Validated input for `POST /movies` | Request body |
//! | [`UpdateMovieRequest`] | Partial input for `PUT /movies/{id}` | Request body |
//! | [`Movie`] | Domain entity, one row of `movies` | Repository return |
//! | [`MovieWithReviews`] | Movie plus its owned reviews | Service return |
//! | [`MovieResponse`] | Serialized output to client | Response body |
//!
//! # Relations
//!
//! A movie has many reviews. Deleting a movie deletes its reviews; the
//! store is responsible for the cascade.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Repository, SortDirection,
    review::{Review, ReviewResponse}
};

/// A film with descriptive fields and a derived average rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Primary key, UUIDv7.
    pub id:             Uuid,
    /// Movie title.
    pub title:          String,
    /// Free-form description.
    pub description:    String,
    /// Director name.
    pub director:       String,
    /// Release year, `1900..=2100`.
    pub release_year:   i32,
    /// Mean of review ratings rounded to one decimal, `0.0` without reviews.
    pub average_rating: f64,
    /// Creation timestamp.
    pub created_at:     DateTime<Utc>
}

impl From<CreateMovieRequest> for Movie {
    /// Build a new movie with a fresh id, no rating and the current time.
    fn from(dto: CreateMovieRequest) -> Self {
        Self {
            id:             Uuid::now_v7(),
            title:          dto.title,
            description:    dto.description,
            director:       dto.director,
            release_year:   dto.release_year,
            average_rating: 0.0,
            created_at:     Utc::now()
        }
    }
}

/// Request DTO for creating a new movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct CreateMovieRequest {
    /// Movie title.
    #[cfg_attr(feature = "api", schema(example = "Inception", min_length = 1))]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "title must not be empty"))
    )]
    pub title: String,

    /// Free-form description.
    #[cfg_attr(
        feature = "api",
        schema(example = "A thief who steals corporate secrets through dream-sharing.", min_length = 1)
    )]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "description must not be empty"))
    )]
    pub description: String,

    /// Director name.
    #[cfg_attr(feature = "api", schema(example = "Christopher Nolan", min_length = 1))]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "director must not be empty"))
    )]
    pub director: String,

    /// Release year.
    #[cfg_attr(feature = "api", schema(example = 2010, minimum = 1900, maximum = 2100))]
    #[cfg_attr(
        feature = "validate",
        validate(range(min = 1900, max = 2100, message = "releaseYear must be between 1900 and 2100"))
    )]
    pub release_year: i32
}

/// Request DTO for updating an existing movie.
///
/// Absent fields keep their stored value. Present fields are checked with
/// the same constraints as [`CreateMovieRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct UpdateMovieRequest {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "title must not be empty"))
    )]
    pub title: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "description must not be empty"))
    )]
    pub description: Option<String>,

    /// New director.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validate",
        validate(length(min = 1, message = "director must not be empty"))
    )]
    pub director: Option<String>,

    /// New release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "api", schema(minimum = 1900, maximum = 2100))]
    #[cfg_attr(
        feature = "validate",
        validate(range(min = 1900, max = 2100, message = "releaseYear must be between 1900 and 2100"))
    )]
    pub release_year: Option<i32>
}

impl UpdateMovieRequest {
    /// Check whether no field is set.
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.director.is_none()
            && self.release_year.is_none()
    }
}

/// A movie together with its reviews, newest review first.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithReviews {
    /// The movie row.
    pub movie:   Movie,
    /// Reviews owned by the movie.
    pub reviews: Vec<Review>
}

impl MovieWithReviews {
    /// Wrap a movie that has no reviews yet.
    pub const fn new(movie: Movie) -> Self {
        Self {
            movie,
            reviews: Vec::new()
        }
    }

    /// Attach reviews to their movies.
    ///
    /// Keeps the order of `movies` and, per movie, the order of `reviews`.
    /// Reviews whose movie is not in `movies` are dropped.
    pub fn assemble(movies: Vec<Movie>, reviews: Vec<Review>) -> Vec<Self> {
        let mut by_movie: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }

        movies
            .into_iter()
            .map(|movie| {
                let reviews = by_movie.remove(&movie.id).unwrap_or_default();
                Self {
                    movie,
                    reviews
                }
            })
            .collect()
    }
}

/// Response DTO for API output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct MovieResponse {
    /// Movie unique identifier.
    pub id:             Uuid,
    /// Movie title.
    pub title:          String,
    /// Free-form description.
    pub description:    String,
    /// Director name.
    pub director:       String,
    /// Release year.
    pub release_year:   i32,
    /// Mean review rating, one decimal.
    #[cfg_attr(feature = "api", schema(example = 4.0))]
    pub average_rating: f64,
    /// Creation timestamp.
    pub created_at:     DateTime<Utc>,
    /// Reviews, newest first.
    pub reviews:        Vec<ReviewResponse>
}

impl From<MovieWithReviews> for MovieResponse {
    fn from(value: MovieWithReviews) -> Self {
        let MovieWithReviews {
            movie,
            reviews
        } = value;
        Self {
            id:             movie.id,
            title:          movie.title,
            description:    movie.description,
            director:       movie.director,
            release_year:   movie.release_year,
            average_rating: movie.average_rating,
            created_at:     movie.created_at,
            reviews:        reviews.into_iter().map(ReviewResponse::from).collect()
        }
    }
}

/// Repository for the `movies` table.
///
/// # Example
///
/// ```rust,ignore
/// let movie = repo.create(dto).await?;
/// let reviews = repo.find_reviews(movie.id).await?;
/// ```
#[async_trait]
pub trait MovieRepository: Repository {
    /// Insert a new movie with `average_rating = 0`.
    async fn create(&self, dto: CreateMovieRequest) -> Result<Movie, Self::Error>;

    /// Find a movie by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, Self::Error>;

    /// List every movie ordered by creation time.
    async fn list(&self, order: SortDirection) -> Result<Vec<Movie>, Self::Error>;

    /// Merge the provided fields into a stored movie.
    ///
    /// Returns `None` when the movie does not exist.
    async fn update(
        &self,
        id: Uuid,
        dto: UpdateMovieRequest
    ) -> Result<Option<Movie>, Self::Error>;

    /// Delete a movie and, through the cascade, its reviews.
    ///
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, Self::Error>;

    /// Reviews of one movie, newest first.
    async fn find_reviews(&self, id: Uuid) -> Result<Vec<Review>, Self::Error>;

    /// Reviews of several movies, newest first.
    async fn find_reviews_of(&self, ids: &[Uuid]) -> Result<Vec<Review>, Self::Error>;

    /// Overwrite the stored average rating.
    ///
    /// Returns `false` when the movie does not exist.
    async fn set_average_rating(&self, id: Uuid, average: f64) -> Result<bool, Self::Error>;
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn movie(title: &str) -> Movie {
        Movie::from(CreateMovieRequest {
            title:        title.to_string(),
            description:  "desc".to_string(),
            director:     "dir".to_string(),
            release_year: 2010
        })
    }

    fn review(movie_id: Uuid, rating: i32) -> Review {
        Review {
            id: Uuid::now_v7(),
            rating,
            comment: "ok".to_string(),
            user_name: "ann".to_string(),
            movie_id,
            created_at: Utc::now()
        }
    }

    #[test]
    fn create_dto_to_entity() {
        let m = movie("Inception");
        assert_eq!(m.title, "Inception");
        assert_eq!(m.release_year, 2010);
        assert_eq!(m.average_rating, 0.0);
        assert!(!m.id.is_nil());
    }

    #[test]
    fn update_is_empty() {
        assert!(UpdateMovieRequest::default().is_empty());
        let update = UpdateMovieRequest {
            release_year: Some(1999),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn assemble_groups_reviews_by_movie() {
        let a = movie("A");
        let b = movie("B");
        let reviews = vec![review(b.id, 5), review(a.id, 3), review(b.id, 1)];

        let grouped = MovieWithReviews::assemble(vec![a.clone(), b.clone()], reviews);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].movie.id, a.id);
        assert_eq!(grouped[0].reviews.len(), 1);
        assert_eq!(grouped[1].movie.id, b.id);
        let ratings: Vec<i32> = grouped[1].reviews.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 1]);
    }

    #[test]
    fn assemble_drops_unknown_reviews() {
        let a = movie("A");
        let grouped = MovieWithReviews::assemble(vec![a], vec![review(Uuid::now_v7(), 4)]);
        assert!(grouped[0].reviews.is_empty());
    }

    #[test]
    fn response_serializes_camel_case() {
        let mut m = movie("Inception");
        m.created_at -= Duration::days(1);
        let response = MovieResponse::from(MovieWithReviews::new(m));
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(json["releaseYear"], 2010);
        assert_eq!(json["averageRating"], 0.0);
        assert!(json["createdAt"].is_string());
        assert_eq!(json["reviews"], serde_json::json!([]));
    }

    #[test]
    fn update_accepts_partial_body() {
        let update: UpdateMovieRequest =
            serde_json::from_str(r#"{"title":"Tenet"}"#).expect("deserialize");
        assert_eq!(update.title.as_deref(), Some("Tenet"));
        assert!(update.release_year.is_none());
    }

    #[cfg(feature = "validate")]
    mod validation {
        use validator::Validate;

        use super::*;

        fn valid() -> CreateMovieRequest {
            CreateMovieRequest {
                title:        "Inception".to_string(),
                description:  "Dreams".to_string(),
                director:     "Nolan".to_string(),
                release_year: 2010
            }
        }

        #[test]
        fn accepts_valid_movie() {
            assert!(valid().validate().is_ok());
        }

        #[test]
        fn rejects_empty_strings() {
            for field in ["title", "description", "director"] {
                let mut dto = valid();
                match field {
                    "title" => dto.title.clear(),
                    "description" => dto.description.clear(),
                    _ => dto.director.clear()
                }
                let errors = dto.validate().expect_err("empty field must fail");
                assert!(errors.field_errors().contains_key(field), "{field}");
            }
        }

        #[test]
        fn release_year_bounds() {
            for (year, ok) in [(1899, false), (1900, true), (2100, true), (2101, false)] {
                let dto = CreateMovieRequest {
                    release_year: year,
                    ..valid()
                };
                assert_eq!(dto.validate().is_ok(), ok, "{year}");
            }
        }

        #[test]
        fn update_checks_only_present_fields() {
            assert!(UpdateMovieRequest::default().validate().is_ok());

            let bad_year = UpdateMovieRequest {
                release_year: Some(1800),
                ..Default::default()
            };
            assert!(bad_year.validate().is_err());

            let empty_title = UpdateMovieRequest {
                title: Some(String::new()),
                ..Default::default()
            };
            assert!(empty_title.validate().is_err());
        }
    }
}
