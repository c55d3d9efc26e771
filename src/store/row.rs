// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database row structs.
//!
//! Each `*Row` maps one-to-one onto a table and derives `sqlx::FromRow`.
//! Conversion into the domain entity happens through `From`, keeping
//! the entity free of database derives.

use chrono::{DateTime, Utc};
use movie_reviews_core::{Movie, Review};
use uuid::Uuid;

/// Columns of `movies`, in [`MovieRow`] order.
pub const MOVIE_COLUMNS: &str =
    "id, title, description, director, release_year, average_rating, created_at";

/// Columns of `reviews`, in [`ReviewRow`] order.
pub const REVIEW_COLUMNS: &str = "id, rating, comment, user_name, movie_id, created_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRow {
    pub id:             Uuid,
    pub title:          String,
    pub description:    String,
    pub director:       String,
    pub release_year:   i32,
    pub average_rating: f64,
    pub created_at:     DateTime<Utc>
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id:             row.id,
            title:          row.title,
            description:    row.description,
            director:       row.director,
            release_year:   row.release_year,
            average_rating: row.average_rating,
            created_at:     row.created_at
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id:         Uuid,
    pub rating:     i32,
    pub comment:    String,
    pub user_name:  String,
    pub movie_id:   Uuid,
    pub created_at: DateTime<Utc>
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id:         row.id,
            rating:     row.rating,
            comment:    row.comment,
            user_name:  row.user_name,
            movie_id:   row.movie_id,
            created_at: row.created_at
        }
    }
}
