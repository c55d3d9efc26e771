// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Movie endpoints.
//!
//! Every response embeds the movie's reviews, newest first.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode
};
use masterror::AppResult;
use movie_reviews_core::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use uuid::Uuid;

use super::AppState;

/// Create a new movie.
///
/// # Responses
///
/// - `201 Created` - Movie created with `averageRating = 0`
/// - `400 Bad Request` - Invalid request data
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body(content = CreateMovieRequest, description = "Data for creating a new movie"),
    responses(
        (status = 201, description = "Movie created successfully", body = MovieResponse),
        (status = 400, description = "Invalid request data"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(dto): Json<CreateMovieRequest>
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    let movie = state.movies.create(dto).await?;
    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie))))
}

/// List all movies, newest first.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies with their reviews", body = [MovieResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = state.movies.list().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Get a movie by ID.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 400, description = "Malformed movie ID"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> AppResult<Json<MovieResponse>> {
    let movie = state.movies.get(id).await?;
    Ok(Json(MovieResponse::from(movie)))
}

/// Update a movie.
///
/// Only fields present in the body change.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = Uuid, Path, description = "Movie ID")),
    request_body(content = UpdateMovieRequest, description = "Fields to update"),
    responses(
        (status = 200, description = "Movie updated successfully", body = MovieResponse),
        (status = 400, description = "Invalid request data"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateMovieRequest>
) -> AppResult<Json<MovieResponse>> {
    let movie = state.movies.update(id, dto).await?;
    Ok(Json(MovieResponse::from(movie)))
}

/// Delete a movie and all of its reviews.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Movie deleted successfully"),
        (status = 400, description = "Malformed movie ID"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
