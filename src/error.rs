// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for services and startup.
//!
//! # Mapping
//!
//! | [`ServiceError`] | HTTP |
//! |------------------|------|
//! | `MovieNotFound` | `404 Not Found` |
//! | `ReviewNotFound` | `404 Not Found` |
//! | `Invalid` | `400 Bad Request` |
//! | `Repository` | `500 Internal Server Error` |
//!
//! Repository errors are logged and replaced by a generic message, so no
//! SQL details reach the client.

use std::{error::Error as StdError, fmt, io};

use masterror::AppError;
use validator::ValidationErrors;

use crate::config::ConfigError;

/// Error returned by movie and review services.
///
/// Generic over the repository error `E`.
#[derive(Debug)]
pub enum ServiceError<E> {
    /// No movie with the requested id.
    MovieNotFound,

    /// No review with the requested id.
    ReviewNotFound,

    /// Request fields failed validation; nothing was persisted.
    Invalid(ValidationErrors),

    /// The repository failed.
    Repository(E)
}

impl<E: fmt::Display> fmt::Display for ServiceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovieNotFound => f.write_str("Movie not found"),
            Self::ReviewNotFound => f.write_str("Review not found"),
            Self::Invalid(e) => write!(f, "validation failed: {e}"),
            Self::Repository(e) => write!(f, "repository error: {e}")
        }
    }
}

impl<E: StdError + 'static> StdError for ServiceError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Repository(e) => Some(e),
            Self::MovieNotFound | Self::ReviewNotFound => None
        }
    }
}

impl<E> ServiceError<E> {
    /// Check if this is a not-found error for either entity.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::MovieNotFound | Self::ReviewNotFound)
    }

    /// Check if this is a validation error.
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Check if this is a repository error.
    pub const fn is_repository(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

impl<E> From<ValidationErrors> for ServiceError<E> {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl<E: fmt::Display> From<ServiceError<E>> for AppError {
    fn from(err: ServiceError<E>) -> Self {
        match err {
            ServiceError::MovieNotFound => AppError::not_found("Movie not found"),
            ServiceError::ReviewNotFound => AppError::not_found("Review not found"),
            ServiceError::Invalid(errors) => AppError::bad_request(errors.to_string()),
            ServiceError::Repository(e) => {
                tracing::error!(error = %e, "repository operation failed");
                AppError::internal("Internal server error")
            }
        }
    }
}

/// Error that stops the server from starting or running.
#[derive(Debug)]
pub enum ServerError {
    /// Configuration could not be loaded.
    Config(ConfigError),

    /// Connecting to the database or syncing the schema failed.
    Database(sqlx::Error),

    /// The listen socket could not be bound.
    Bind(io::Error),

    /// The server stopped with an I/O error.
    Serve(io::Error)
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Database(e) => write!(f, "database error: {e}"),
            Self::Bind(e) => write!(f, "failed to bind listener: {e}"),
            Self::Serve(e) => write!(f, "server error: {e}")
        }
    }
}

impl StdError for ServerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Database(e) => Some(e),
            Self::Bind(e) | Self::Serve(e) => Some(e)
        }
    }
}

impl From<ConfigError> for ServerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<sqlx::Error> for ServerError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use movie_reviews_core::CreateReviewRequest;
    use validator::Validate;

    use super::*;

    type TestError = ServiceError<io::Error>;

    fn invalid() -> TestError {
        let dto = CreateReviewRequest {
            rating:    9,
            comment:   "too good".to_string(),
            user_name: "ann".to_string()
        };
        match dto.validate() {
            Err(errors) => ServiceError::Invalid(errors),
            Ok(()) => panic!("rating 9 must be rejected")
        }
    }

    fn status(err: TestError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(status(ServiceError::MovieNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(ServiceError::ReviewNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_maps_to_400() {
        assert_eq!(status(invalid()), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn repository_maps_to_500() {
        let err = ServiceError::Repository(io::Error::other("disk full"));
        assert_eq!(status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn predicates() {
        assert!(TestError::MovieNotFound.is_not_found());
        assert!(TestError::ReviewNotFound.is_not_found());
        assert!(invalid().is_invalid());
        assert!(ServiceError::Repository(io::Error::other("x")).is_repository());
        assert!(!invalid().is_not_found());
    }

    #[test]
    fn display() {
        assert_eq!(TestError::MovieNotFound.to_string(), "Movie not found");
        assert_eq!(TestError::ReviewNotFound.to_string(), "Review not found");
        let err = ServiceError::Repository(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "repository error: disk full");
    }

    #[test]
    fn source_chain() {
        assert!(TestError::MovieNotFound.source().is_none());
        assert!(invalid().source().is_some());
        let err = ServerError::Bind(io::Error::other("in use"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to bind listener: in use");
    }
}
