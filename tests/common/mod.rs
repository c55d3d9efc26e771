// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header}
};
use http_body_util::BodyExt;
use movie_reviews::{AppState, Store, router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    router: Router
}

pub struct TestResponse {
    pub status:       StatusCode,
    pub headers:      HeaderMap,
    pub content_type: Option<String>,
    pub body:         Vec<u8>
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Store::open("sqlite::memory:").await.expect("open store");
        Self {
            router: router(AppState::new(store))
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty())
        }
        .expect("build request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            content_type,
            body
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a movie and return its JSON.
    pub async fn create_movie(&self, body: Value) -> Value {
        let response = self.post("/movies", body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.json()
    }

    /// Create a review and return its JSON.
    pub async fn create_review(&self, movie_id: &str, rating: i64) -> Value {
        let response = self
            .post(&format!("/reviews/{movie_id}"), review(rating))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.json()
    }

    pub async fn average_rating(&self, movie_id: &str) -> f64 {
        let movie = self.get(&format!("/movies/{movie_id}")).await.json();
        movie["averageRating"].as_f64().expect("averageRating is a number")
    }
}

pub fn inception() -> Value {
    json!({
        "title": "Inception",
        "description": "A thief who steals corporate secrets through dream-sharing.",
        "director": "Christopher Nolan",
        "releaseYear": 2010
    })
}

pub fn review(rating: i64) -> Value {
    json!({
        "rating": rating,
        "comment": "Worth watching",
        "userName": "alice"
    })
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id is a string").to_string()
}
