// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DDL for the `movies` and `reviews` tables.
//!
//! [`sync`] runs every statement in [`STATEMENTS`] inside one transaction.
//! All statements use `IF NOT EXISTS`, so syncing an up-to-date database
//! is a no-op and startup can always call it.

use sqlx::SqlitePool;

/// `CREATE TABLE` for movies.
pub const CREATE_MOVIES: &str = "CREATE TABLE IF NOT EXISTS movies (
    id             BLOB PRIMARY KEY NOT NULL,
    title          TEXT NOT NULL,
    description    TEXT NOT NULL,
    director       TEXT NOT NULL,
    release_year   INTEGER NOT NULL,
    average_rating REAL NOT NULL DEFAULT 0,
    created_at     TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// `CREATE TABLE` for reviews, cascading on movie delete.
pub const CREATE_REVIEWS: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id         BLOB PRIMARY KEY NOT NULL,
    rating     INTEGER NOT NULL,
    comment    TEXT NOT NULL,
    user_name  TEXT NOT NULL,
    movie_id   BLOB NOT NULL REFERENCES movies (id) ON DELETE CASCADE,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Index backing review lookups by movie.
pub const CREATE_REVIEWS_MOVIE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reviews_movie_id ON reviews (movie_id)";

/// Statements applied by [`sync`], in order.
pub const STATEMENTS: [&str; 3] = [CREATE_MOVIES, CREATE_REVIEWS, CREATE_REVIEWS_MOVIE_INDEX];

/// Create missing tables and indexes.
pub async fn sync(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!(statements = STATEMENTS.len(), "schema synchronized");
    Ok(())
}
