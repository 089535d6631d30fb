//! Shared fixtures for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production) via
//! `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use stagium_api::auth::jwt::JwtConfig;
use stagium_api::auth::password::hash_password;
use stagium_api::config::ServerConfig;
use stagium_api::router::build_app_router;
use stagium_api::state::AppState;
use stagium_db::models::utilisateur::{CreateUtilisateur, Utilisateur};
use stagium_db::repositories::UtilisateurRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };
    app.oneshot(request).await.expect("request must not error")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database with a real Argon2id hash.
pub async fn seed_user(pool: &PgPool, login: &str, role: &str, password: &str) -> Utilisateur {
    let pwd = hash_password(password).expect("hashing should succeed");
    let input = CreateUtilisateur {
        login: login.to_string(),
        email: format!("{login}@test.com"),
        pwd,
        role: role.to_string(),
        avatar: "img1.jpg".to_string(),
    };
    UtilisateurRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log in through the API and return the bearer token.
pub async fn login_token(app: Router, login: &str, password: &str) -> String {
    let body = serde_json::json!({ "login": login, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login must succeed");
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("token must be a string")
        .to_string()
}

/// Seed an ADMIN account and return a valid token for it.
pub async fn admin_token(pool: &PgPool, app: Router) -> String {
    seed_user(pool, "admin-fixture", "ADMIN", "fixture-password").await;
    login_token(app, "admin-fixture", "fixture-password").await
}

/// Seed a VISITEUR account and return a valid token for it.
pub async fn visiteur_token(pool: &PgPool, app: Router) -> String {
    seed_user(pool, "visiteur-fixture", "VISITEUR", "fixture-password").await;
    login_token(app, "visiteur-fixture", "fixture-password").await
}
