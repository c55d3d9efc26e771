// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod common;

use axum::http::StatusCode;
use common::{TestApp, id_of, inception, review};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn average_rating_follows_reviews() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);

    let five = id_of(&app.create_review(&movie, 5).await);
    let three = id_of(&app.create_review(&movie, 3).await);
    assert_eq!(app.average_rating(&movie).await, 4.0);

    let response = app.delete(&format!("/reviews/{five}")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.average_rating(&movie).await, 3.0);

    app.delete(&format!("/reviews/{three}")).await;
    assert_eq!(app.average_rating(&movie).await, 0.0);
}

#[tokio::test]
async fn average_rating_rounds_to_one_decimal() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);

    for rating in [5, 4, 4] {
        app.create_review(&movie, rating).await;
    }
    assert_eq!(app.average_rating(&movie).await, 4.3);

    app.create_review(&movie, 2).await;
    assert_eq!(app.average_rating(&movie).await, 3.8);
}

#[tokio::test]
async fn list_shows_updated_average() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);
    app.create_review(&movie, 2).await;

    let movies = app.get("/movies").await.json();
    assert_eq!(movies[0]["averageRating"].as_f64(), Some(2.0));
    assert_eq!(movies[0]["reviews"][0]["rating"], 2);
}

#[tokio::test]
async fn create_review_returns_review() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);

    let response = app.post(&format!("/reviews/{movie}"), review(4)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["rating"], 4);
    assert_eq!(body["comment"], "Worth watching");
    assert_eq!(body["userName"], "alice");
    assert_eq!(body["movieId"], json!(movie));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_review_for_unknown_movie_is_404() {
    let app = TestApp::new().await;
    let unknown = Uuid::now_v7();

    let response = app.post(&format!("/reviews/{unknown}"), review(4)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app.get(&format!("/reviews/movie/{unknown}")).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json(), json!([]));
}

#[tokio::test]
async fn create_review_rejects_invalid_fields() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);

    for body in [
        review(0),
        review(6),
        json!({"rating": 3, "comment": "", "userName": "alice"}),
        json!({"rating": 3, "comment": "ok", "userName": ""})
    ] {
        let response = app.post(&format!("/reviews/{movie}"), body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.text());
    }

    let list = app.get(&format!("/reviews/movie/{movie}")).await.json();
    assert_eq!(list, json!([]));
    assert_eq!(app.average_rating(&movie).await, 0.0);
}

#[tokio::test]
async fn list_reviews_newest_first() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);
    let older = app.create_review(&movie, 1).await;
    let newer = app.create_review(&movie, 5).await;

    let response = app.get(&format!("/reviews/movie/{movie}")).await;
    assert_eq!(response.status, StatusCode::OK);
    let reviews = response.json();
    assert_eq!(reviews.as_array().map(Vec::len), Some(2));
    assert_eq!(reviews[0]["id"], newer["id"]);
    assert_eq!(reviews[1]["id"], older["id"]);
}

#[tokio::test]
async fn get_review() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);
    let created = app.create_review(&movie, 3).await;
    let id = id_of(&created);

    let response = app.get(&format!("/reviews/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), created);

    let missing = app.get(&format!("/reviews/{}", Uuid::now_v7())).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_review_is_404() {
    let app = TestApp::new().await;
    let response = app.delete(&format!("/reviews/{}", Uuid::now_v7())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_movie_cascades_to_reviews() {
    let app = TestApp::new().await;
    let movie = id_of(&app.create_movie(inception()).await);
    let first = id_of(&app.create_review(&movie, 5).await);
    let second = id_of(&app.create_review(&movie, 2).await);

    assert_eq!(app.delete(&format!("/movies/{movie}")).await.status, StatusCode::NO_CONTENT);

    for id in [first, second] {
        assert_eq!(app.get(&format!("/reviews/{id}")).await.status, StatusCode::NOT_FOUND);
    }
    assert_eq!(app.get(&format!("/reviews/movie/{movie}")).await.json(), json!([]));
}

#[tokio::test]
async fn malformed_review_ids_are_400() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/reviews/oops").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/reviews/movie/oops").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.post("/reviews/oops", review(3)).await.status,
        StatusCode::BAD_REQUEST
    );
}
