// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `ReviewRepository` for SQLite.

use movie_reviews_core::prelude::*;
use uuid::Uuid;

use super::{
    Store,
    row::{REVIEW_COLUMNS, ReviewRow}
};

#[async_trait]
impl ReviewRepository for Store {
    async fn create(
        &self,
        movie_id: Uuid,
        dto: CreateReviewRequest
    ) -> Result<Review, Self::Error> {
        let review = Review::new(movie_id, dto);
        let row: ReviewRow = sqlx::query_as(&format!(
            "INSERT INTO reviews ({REVIEW_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(review.id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(&review.user_name)
        .bind(review.movie_id)
        .bind(review.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(Review::from(row))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, Self::Error> {
        let row: Option<ReviewRow> =
            sqlx::query_as(&format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Review::from))
    }

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        order: SortDirection
    ) -> Result<Vec<Review>, Self::Error> {
        let dir = order.as_sql();
        let rows: Vec<ReviewRow> = sqlx::query_as(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE movie_id = ? \
             ORDER BY created_at {dir}, id {dir}"
        ))
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
