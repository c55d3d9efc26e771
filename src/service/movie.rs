// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use movie_reviews_core::{
    CreateMovieRequest, Movie, MovieRepository, MovieWithReviews, SortDirection,
    UpdateMovieRequest, average_rating
};
use uuid::Uuid;
use validator::Validate;

use super::ServiceResult;
use crate::error::ServiceError;

/// Movie operations.
pub struct MovieService<R> {
    repo: Arc<R>
}

impl<R> Clone for MovieService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo)
        }
    }
}

impl<R: MovieRepository> MovieService<R> {
    /// Create a service over a shared repository.
    pub const fn new(repo: Arc<R>) -> Self {
        Self {
            repo
        }
    }

    /// Validate and insert a movie. It starts with no reviews and a zero
    /// average.
    pub async fn create(&self, dto: CreateMovieRequest) -> ServiceResult<MovieWithReviews, R> {
        dto.validate()?;
        let movie = self.repo.create(dto).await.map_err(ServiceError::Repository)?;
        tracing::info!(movie_id = %movie.id, title = %movie.title, "movie created");
        Ok(MovieWithReviews::new(movie))
    }

    /// All movies with their reviews, newest movie first.
    pub async fn list(&self) -> ServiceResult<Vec<MovieWithReviews>, R> {
        let movies = self
            .repo
            .list(SortDirection::Desc)
            .await
            .map_err(ServiceError::Repository)?;
        let ids: Vec<Uuid> = movies.iter().map(|movie| movie.id).collect();
        let reviews = self
            .repo
            .find_reviews_of(&ids)
            .await
            .map_err(ServiceError::Repository)?;
        Ok(MovieWithReviews::assemble(movies, reviews))
    }

    /// One movie with its reviews.
    pub async fn get(&self, id: Uuid) -> ServiceResult<MovieWithReviews, R> {
        let movie = self.find(id).await?.ok_or(ServiceError::MovieNotFound)?;
        self.with_reviews(movie).await
    }

    /// Look up a movie without its reviews.
    pub async fn find(&self, id: Uuid) -> ServiceResult<Option<Movie>, R> {
        self.repo.find_by_id(id).await.map_err(ServiceError::Repository)
    }

    /// Merge the provided fields into a movie.
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateMovieRequest
    ) -> ServiceResult<MovieWithReviews, R> {
        dto.validate()?;
        let movie = self
            .repo
            .update(id, dto)
            .await
            .map_err(ServiceError::Repository)?
            .ok_or(ServiceError::MovieNotFound)?;
        tracing::info!(movie_id = %movie.id, "movie updated");
        self.with_reviews(movie).await
    }

    /// Delete a movie together with its reviews.
    pub async fn delete(&self, id: Uuid) -> ServiceResult<(), R> {
        let deleted = self.repo.delete(id).await.map_err(ServiceError::Repository)?;
        if !deleted {
            return Err(ServiceError::MovieNotFound);
        }
        tracing::info!(movie_id = %id, "movie deleted");
        Ok(())
    }

    /// Recompute and store the average rating of a movie.
    ///
    /// Returns the new average, or `None` when the movie no longer exists.
    pub async fn refresh_average_rating(&self, id: Uuid) -> ServiceResult<Option<f64>, R> {
        if self.find(id).await?.is_none() {
            tracing::debug!(movie_id = %id, "skipping rating refresh for missing movie");
            return Ok(None);
        }

        let reviews = self.repo.find_reviews(id).await.map_err(ServiceError::Repository)?;
        let average = average_rating(reviews.iter().map(|review| review.rating));
        let updated = self
            .repo
            .set_average_rating(id, average)
            .await
            .map_err(ServiceError::Repository)?;

        tracing::debug!(movie_id = %id, reviews = reviews.len(), average, "average rating refreshed");
        Ok(updated.then_some(average))
    }

    async fn with_reviews(&self, movie: Movie) -> ServiceResult<MovieWithReviews, R> {
        let reviews = self
            .repo
            .find_reviews(movie.id)
            .await
            .map_err(ServiceError::Repository)?;
        Ok(MovieWithReviews {
            movie,
            reviews
        })
    }
}
