// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI document served at `/api/docs-json`.

use movie_reviews_core::{
    CreateMovieRequest, CreateReviewRequest, MovieResponse, ReviewResponse, UpdateMovieRequest
};
use utoipa::OpenApi;

use super::{movies, reviews};

/// OpenAPI document for every JSON endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Review API",
        description = "API for managing movies and their reviews with ratings",
        version = "1.0"
    ),
    paths(
        movies::create_movie,
        movies::list_movies,
        movies::get_movie,
        movies::update_movie,
        movies::delete_movie,
        reviews::create_review,
        reviews::list_reviews,
        reviews::get_review,
        reviews::delete_review
    ),
    components(schemas(
        CreateMovieRequest,
        UpdateMovieRequest,
        MovieResponse,
        CreateReviewRequest,
        ReviewResponse
    )),
    tags(
        (name = "movies", description = "Movie management endpoints"),
        (name = "reviews", description = "Review management endpoints")
    )
)]
pub struct ApiDoc;
