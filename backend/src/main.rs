//! Main entry point for the car rental backend.
//!
//! This file initializes the Axum web server, sets up the in-memory rental
//! store, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod errors;
mod services;
mod store;
mod utils;

use crate::store::{DynStore, MemoryStore};
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let store: DynStore = Arc::new(MemoryStore::new());
    let jwt_utils = Arc::new(JwtUtils::new(&config));

    let app = app(store, jwt_utils);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting car rental server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

/// Assembles the full application router. The store and the JWT utilities
/// are injected as extensions so tests can drive the router with substitutes.
fn app(store: DynStore, jwt_utils: Arc<JwtUtils>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/cars", api::car::routes::car_router())
        .nest("/api/auth", auth::routes::auth_router())
        .layer(Extension(store))
        .layer(Extension(jwt_utils))
        .layer(CorsLayer::permissive())
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Car Rental Backend",
        "version": "0.1.0"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::service::AuthService;
    use crate::store::models::{Car, CreateUser};
    use crate::utils::jwt::{TOKEN_AUDIENCE, TOKEN_ISSUER};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            jwt_secret: "test-signing-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 3000,
        }
    }

    fn test_app(store: DynStore) -> (Router, Arc<JwtUtils>) {
        let jwt_utils = Arc::new(JwtUtils::new(&test_config()));
        (app(store, jwt_utils.clone()), jwt_utils)
    }

    async fn seed_alice(store: &MemoryStore, password: &str) {
        store
            .create_user(CreateUser {
                username: "alice".to_string(),
                password_hash: AuthService::hash_password(password).unwrap(),
            })
            .await;
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_cars_on_empty_store_returns_empty_array() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()));

        let response = app.oneshot(get_request("/api/cars")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_car_then_list_returns_it() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()));

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/cars",
                json!({"make": "Toyota", "model": "Corolla", "year": 2020, "price": 15000.0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/cars"
        );
        let created: Car = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.make, "Toyota");

        let response = app.oneshot(get_request("/api/cars")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cars: Vec<Car> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(cars, vec![created]);
    }

    #[tokio::test]
    async fn test_create_car_with_unknown_field_is_rejected() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/cars",
                json!({"make": "Toyota", "model": "Corolla", "year": 2020, "price": 15000.0, "color": "red"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_car_with_taken_id_conflicts() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()));
        let payload = json!({"id": 7, "make": "Toyota", "model": "Corolla", "year": 2020, "price": 15000.0});

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/cars", payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/cars", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app.oneshot(get_request("/api/cars")).await.unwrap();
        let cars: Vec<Car> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(cars.len(), 1);
    }

    #[tokio::test]
    async fn test_login_with_unknown_username_is_401_with_empty_body() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({"username": "alice", "password": "x"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_401() {
        let store = MemoryStore::new();
        seed_alice(&store, "x").await;
        let (app, _) = test_app(Arc::new(store));

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({"username": "alice", "password": "not x"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_issues_well_formed_token() {
        let store = MemoryStore::new();
        seed_alice(&store, "x").await;
        let (app, jwt_utils) = test_app(Arc::new(store));

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({"username": "alice", "password": "x"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let token = body["Token"].as_str().unwrap();

        let claims = jwt_utils.validate_token(token).unwrap();
        assert_eq!(claims.username(), "alice");
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.aud, TOKEN_AUDIENCE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn test_me_requires_valid_bearer_token() {
        let store = MemoryStore::new();
        seed_alice(&store, "x").await;
        let (app, jwt_utils) = test_app(Arc::new(store));

        let response = app.clone().oneshot(get_request("/api/auth/me")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let foreign = JwtUtils::new(&Config {
            jwt_secret: "another-secret".to_string(),
            ..test_config()
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", foreign.generate_token("alice").unwrap()),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let token = jwt_utils.generate_token("alice").unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["username"], "alice");
        assert_eq!(body["id"], 1);
    }
}
