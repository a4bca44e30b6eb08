//! # Expense Tracker Backend
//!
//! HTTP service for a single-user expense tracker: create, list and delete
//! expenses, compute simple analytics, and keep everything in one data file
//! between runs.
//!
//! ## Architecture
//!
//! ```text
//! Browser front end (static files)
//!     ↓
//! IO Layer (REST handlers, mappers)
//!     ↓
//! Domain Layer (expense service, analytics)
//!     ↓
//! Storage Layer (JSON data file)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{delete, get},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::ExpenseService;
use crate::storage::JsonConnection;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService<JsonConnection>,
}

/// Open the data file and load the expense book
pub async fn initialize_backend(config: &ServerConfig) -> AppState {
    info!("Setting up expense store at {}", config.data_file.display());
    let connection = Arc::new(JsonConnection::new(&config.data_file));

    info!("Setting up domain model");
    let expense_service = ExpenseService::new(connection).await;

    AppState { expense_service }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/expenses",
            get(io::list_expenses)
                .post(io::create_expense)
                .delete(io::delete_without_id)
                .options(io::expenses_options),
        )
        .route("/expenses/", delete(io::delete_without_id))
        .route("/expenses/:id", delete(io::delete_expense))
        .route("/analytics", get(io::get_analytics));

    Router::new()
        .nest("/api", api_routes)
        .merge(io::frontend_routes(&config.frontend_dir))
        .fallback(io::not_found)
        .layer(CatchPanicLayer::custom(io::handle_panic))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
pub(crate) async fn test_state(env: &storage::json::test_utils::TestEnvironment) -> AppState {
    AppState {
        expense_service: ExpenseService::new(Arc::new(env.connection.clone())).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct TestServer {
        env: TestEnvironment,
        router: Router,
    }

    impl TestServer {
        async fn new() -> Self {
            let env = TestEnvironment::new().unwrap();
            let frontend_dir = env.base_directory().join("frontend");
            std::fs::create_dir_all(&frontend_dir).unwrap();
            std::fs::write(frontend_dir.join("index.html"), "<h1>Expenses</h1>").unwrap();

            let config = ServerConfig {
                data_file: env.data_file().to_path_buf(),
                frontend_dir,
                ..ServerConfig::default()
            };
            let state = initialize_backend(&config).await;
            let router = create_router(state, &config);

            Self { env, router }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
            let mut builder = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::ORIGIN, "http://localhost:3000");
            let body = match body {
                Some(value) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(value.to_string())
                }
                None => Body::empty(),
            };
            self.router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap()
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_create_list_delete_flow() {
        let server = TestServer::new().await;

        let response = server
            .send(
                Method::POST,
                "/api/expenses",
                Some(json!({
                    "category": "Food",
                    "amount": 10,
                    "date": "2024-01-01",
                    "description": "Lunch"
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let created = body_json(response).await;
        assert_eq!(
            created,
            json!({
                "id": 1,
                "category": "Food",
                "amount": 10.0,
                "date": "2024-01-01",
                "description": "Lunch"
            })
        );

        let response = server.send(Method::GET, "/api/expenses", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([created]));

        let response = server.send(Method::DELETE, "/api/expenses/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "message": "Expense deleted" }));

        let response = server.send(Method::DELETE, "/api/expenses/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Expense not found" }));
    }

    #[tokio::test]
    async fn test_post_missing_amount_is_rejected() {
        let server = TestServer::new().await;

        let response = server
            .send(
                Method::POST,
                "/api/expenses",
                Some(json!({ "category": "Food", "date": "2024-01-01" })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = server.send(Method::GET, "/api/expenses", None).await;
        assert_eq!(body_json(response).await, json!([]));
        assert!(!server.env.data_file().exists());
    }

    #[tokio::test]
    async fn test_post_malformed_body_is_bad_request() {
        let server = TestServer::new().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/expenses")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = server.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_accepts_amount_as_string() {
        let server = TestServer::new().await;

        let response = server
            .send(
                Method::POST,
                "/api/expenses",
                Some(json!({ "category": "Gas", "amount": "20.50", "date": "2024-01-02" })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["amount"], json!(20.5));
    }

    #[tokio::test]
    async fn test_delete_bad_ids() {
        let server = TestServer::new().await;

        let response = server.send(Method::DELETE, "/api/expenses/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = server.send(Method::DELETE, "/api/expenses", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = server.send(Method::DELETE, "/api/expenses/", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_bytes(response).await, b"Missing expense ID");

        let response = server.send(Method::DELETE, "/api/expenses/42", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_returns_empty_ok() {
        let server = TestServer::new().await;

        let response = server.send(Method::OPTIONS, "/api/expenses", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_analytics_endpoint() {
        let server = TestServer::new().await;
        for (category, amount, date) in [
            ("Food", 10.0, "2024-01-02"),
            ("Food", 5.0, "2024-01-01"),
            ("Gas", 20.0, "2024-01-01"),
        ] {
            server
                .send(
                    Method::POST,
                    "/api/expenses",
                    Some(json!({ "category": category, "amount": amount, "date": date })),
                )
                .await;
        }

        let response = server.send(Method::GET, "/api/analytics", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "total": 35.0,
                "byCategory": { "Food": 15.0, "Gas": 20.0 },
                "highest": { "category": "Gas", "amount": 20.0 },
                "lowest": { "category": "Food", "amount": 15.0 },
                "trend": [
                    { "date": "2024-01-01", "amount": 25.0 },
                    { "date": "2024-01-02", "amount": 10.0 }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_static_files_and_fallback() {
        let server = TestServer::new().await;

        let response = server.send(Method::GET, "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<h1>Expenses</h1>");

        // Listed asset that is missing on disk
        let response = server.send(Method::GET, "/style.css", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = server.send(Method::GET, "/secrets.txt", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Not found");
    }
}
