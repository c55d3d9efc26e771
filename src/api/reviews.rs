// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Review endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode
};
use masterror::AppResult;
use movie_reviews_core::{CreateReviewRequest, ReviewResponse};
use uuid::Uuid;

use super::AppState;

/// Add a review to a movie and refresh its average rating.
///
/// # Responses
///
/// - `201 Created` - Review created
/// - `400 Bad Request` - Invalid request data
/// - `404 Not Found` - Movie does not exist
/// - `500 Internal Server Error` - Database or server error
#[utoipa::path(
    post,
    path = "/reviews/{movieId}",
    tag = "reviews",
    params(("movieId" = Uuid, Path, description = "Movie ID")),
    request_body(content = CreateReviewRequest, description = "Data for creating a new review"),
    responses(
        (status = 201, description = "Review created successfully", body = ReviewResponse),
        (status = 400, description = "Invalid request data"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
    Json(dto): Json<CreateReviewRequest>
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let review = state.reviews.create(movie_id, dto).await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

/// List the reviews of a movie, newest first.
///
/// An unknown movie has no reviews, so the list is empty rather than 404.
#[utoipa::path(
    get,
    path = "/reviews/movie/{movieId}",
    tag = "reviews",
    params(("movieId" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Reviews of the movie", body = [ReviewResponse]),
        (status = 400, description = "Malformed movie ID"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>
) -> AppResult<Json<Vec<ReviewResponse>>> {
    let reviews = state.reviews.list_by_movie(movie_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// Get a review by ID.
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 400, description = "Malformed review ID"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> AppResult<Json<ReviewResponse>> {
    let review = state.reviews.get(id).await?;
    Ok(Json(ReviewResponse::from(review)))
}

/// Delete a review and refresh its movie's average rating.
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted successfully"),
        (status = 400, description = "Malformed review ID"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> AppResult<StatusCode> {
    state.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
