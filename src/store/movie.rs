// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `MovieRepository` for SQLite.
//!
//! # SQL Queries
//!
//! | Method | Query Pattern |
//! |--------|---------------|
//! | `create` | `INSERT INTO movies (...) VALUES (?, ...) RETURNING ...` |
//! | `find_by_id` | `SELECT ... FROM movies WHERE id = ?` |
//! | `list` | `SELECT ... FROM movies ORDER BY created_at {dir}, id {dir}` |
//! | `update` | `UPDATE movies SET col = COALESCE(?, col), ... WHERE id = ? RETURNING ...` |
//! | `delete` | `DELETE FROM movies WHERE id = ?` |
//! | `find_reviews_of` | `SELECT ... FROM reviews WHERE movie_id IN (?, ...)` |
//! | `set_average_rating` | `UPDATE movies SET average_rating = ? WHERE id = ?` |
//!
//! Ids are UUIDv7, so ordering by `id` after `created_at` keeps insertion
//! order for rows created within the same timestamp.

use movie_reviews_core::prelude::*;
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

use super::{
    Store,
    row::{MOVIE_COLUMNS, MovieRow, REVIEW_COLUMNS, ReviewRow}
};

#[async_trait]
impl MovieRepository for Store {
    async fn create(&self, dto: CreateMovieRequest) -> Result<Movie, Self::Error> {
        let movie = Movie::from(dto);
        let row: MovieRow = sqlx::query_as(&format!(
            "INSERT INTO movies ({MOVIE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(&movie.director)
        .bind(movie.release_year)
        .bind(movie.average_rating)
        .bind(movie.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(Movie::from(row))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, Self::Error> {
        let row: Option<MovieRow> =
            sqlx::query_as(&format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Movie::from))
    }

    async fn list(&self, order: SortDirection) -> Result<Vec<Movie>, Self::Error> {
        let dir = order.as_sql();
        let rows: Vec<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY created_at {dir}, id {dir}"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        dto: UpdateMovieRequest
    ) -> Result<Option<Movie>, Self::Error> {
        if dto.is_empty() {
            return MovieRepository::find_by_id(self, id).await;
        }

        let row: Option<MovieRow> = sqlx::query_as(&format!(
            "UPDATE movies SET \
             title = COALESCE(?, title), \
             description = COALESCE(?, description), \
             director = COALESCE(?, director), \
             release_year = COALESCE(?, release_year) \
             WHERE id = ? RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.director)
        .bind(dto.release_year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Movie::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_reviews(&self, id: Uuid) -> Result<Vec<Review>, Self::Error> {
        ReviewRepository::list_by_movie(self, id, SortDirection::Desc).await
    }

    async fn find_reviews_of(&self, ids: &[Uuid]) -> Result<Vec<Review>, Self::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE movie_id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY created_at DESC, id DESC");

        let rows: Vec<ReviewRow> = builder.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn set_average_rating(&self, id: Uuid, average: f64) -> Result<bool, Self::Error> {
        let result = sqlx::query("UPDATE movies SET average_rating = ? WHERE id = ?")
            .bind(average)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
