// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use movie_reviews_core::{
    CreateReviewRequest, MovieRepository, Review, ReviewRepository, SortDirection
};
use uuid::Uuid;
use validator::Validate;

use super::{MovieService, ServiceResult};
use crate::error::ServiceError;

/// Review operations.
///
/// Every write is followed by a refresh of the parent movie's average
/// rating through [`MovieService::refresh_average_rating`].
pub struct ReviewService<R, M> {
    repo:   Arc<R>,
    movies: MovieService<M>
}

impl<R, M> Clone for ReviewService<R, M> {
    fn clone(&self) -> Self {
        Self {
            repo:   Arc::clone(&self.repo),
            movies: self.movies.clone()
        }
    }
}

impl<R, M> ReviewService<R, M>
where
    R: ReviewRepository,
    M: MovieRepository<Error = R::Error>
{
    /// Create a service over a review repository and the movie service.
    pub const fn new(repo: Arc<R>, movies: MovieService<M>) -> Self {
        Self {
            repo,
            movies
        }
    }

    /// Validate and insert a review, then refresh the movie's average.
    ///
    /// Fails with [`ServiceError::MovieNotFound`] before inserting anything
    /// when the movie does not exist.
    pub async fn create(
        &self,
        movie_id: Uuid,
        dto: CreateReviewRequest
    ) -> ServiceResult<Review, R> {
        dto.validate()?;
        if self.movies.find(movie_id).await?.is_none() {
            return Err(ServiceError::MovieNotFound);
        }

        let review = self
            .repo
            .create(movie_id, dto)
            .await
            .map_err(ServiceError::Repository)?;
        tracing::info!(
            review_id = %review.id,
            movie_id = %movie_id,
            rating = review.rating,
            "review created"
        );

        self.movies.refresh_average_rating(movie_id).await?;
        Ok(review)
    }

    /// Reviews of a movie, newest first. Empty for an unknown movie.
    pub async fn list_by_movie(&self, movie_id: Uuid) -> ServiceResult<Vec<Review>, R> {
        self.repo
            .list_by_movie(movie_id, SortDirection::Desc)
            .await
            .map_err(ServiceError::Repository)
    }

    /// One review.
    pub async fn get(&self, id: Uuid) -> ServiceResult<Review, R> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repository)?
            .ok_or(ServiceError::ReviewNotFound)
    }

    /// Delete a review, then refresh the movie's average.
    pub async fn delete(&self, id: Uuid) -> ServiceResult<(), R> {
        let review = self.get(id).await?;
        let deleted = self.repo.delete(id).await.map_err(ServiceError::Repository)?;
        if !deleted {
            return Err(ServiceError::ReviewNotFound);
        }
        tracing::info!(review_id = %id, movie_id = %review.movie_id, "review deleted");

        self.movies.refresh_average_rating(review.movie_id).await?;
        Ok(())
    }
}
