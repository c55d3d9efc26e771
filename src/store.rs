// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite persistence.
//!
//! [`Store`] wraps an sqlx pool and implements both
//! [`MovieRepository`](movie_reviews_core::MovieRepository) and
//! [`ReviewRepository`](movie_reviews_core::ReviewRepository).
//!
//! # Connections
//!
//! | URL | Pool |
//! |-----|------|
//! | `sqlite://movie-review.db` | File, created if missing |
//! | `sqlite::memory:` | One connection that is never recycled |
//!
//! Every connection enables `PRAGMA foreign_keys`, which is what makes
//! deleting a movie delete its reviews.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = Store::open("sqlite::memory:").await?;
//! let movie = MovieRepository::create(&store, dto).await?;
//! ```

mod movie;
mod review;
mod row;
pub mod schema;

use std::str::FromStr;

use movie_reviews_core::Repository;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions}
};

/// Handle on the SQLite pool.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool
}

impl Store {
    /// Connect to `url` without touching the schema.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_memory_url(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url, "connected to sqlite");
        Ok(Self::from_pool(pool))
    }

    /// Connect to `url` and create the schema if it is missing.
    pub async fn open(url: &str) -> Result<Self, sqlx::Error> {
        let store = Self::connect(url).await?;
        store.sync_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool.
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool
        }
    }

    /// Create missing tables and indexes.
    pub async fn sync_schema(&self) -> Result<(), sqlx::Error> {
        schema::sync(&self.pool).await
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Repository for Store {
    type Error = sqlx::Error;
    type Pool = SqlitePool;

    fn pool(&self) -> &Self::Pool {
        &self.pool
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
