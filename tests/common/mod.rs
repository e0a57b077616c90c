//! Fake course backend for integration tests.
//!
//! Serves the three endpoints the client uses on an ephemeral local port.
//! Login behaviour is keyed by email so each test can pick the response it
//! needs.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use course_portal::adapters::auth::RestAuthApi;
use course_portal::adapters::catalog::RestCourseCatalog;
use course_portal::adapters::rest::{RestClient, RestClientConfig};
use course_portal::adapters::storage::InMemoryKeyValueStore;
use course_portal::application::{AppContext, SessionService};
use course_portal::ports::KeyValueStore;

pub const ADMIN_EMAIL: &str = "ana@example.com";
pub const STUDENT_EMAIL: &str = "luis@example.com";
pub const PASSWORD: &str = "secret";

/// What `GET /api/courses` answers.
#[derive(Debug, Clone, Copy)]
pub enum CoursesMode {
    Ready,
    Empty,
    Fail,
}

pub fn sample_courses() -> Value {
    json!([
        {
            "id": 1,
            "title": "Setup and install",
            "description": "Get your environment ready",
            "lessons": [
                {
                    "id": "1-1",
                    "title": "Install Python",
                    "description": "Download and install",
                    "duration": "5:00",
                    "videoUrl": "https://videos.example.com/1-1",
                    "thumbnail": "https://img.example.com/1-1.png",
                    "completed": true
                },
                {
                    "id": "1-2",
                    "title": "First notebook",
                    "duration": "8:30",
                    "videoUrl": "https://videos.example.com/1-2"
                }
            ]
        },
        {
            "id": 2,
            "title": "Statistics",
            "lessons": [
                {
                    "id": "2-1",
                    "title": "Averages",
                    "duration": "12:00",
                    "videoUrl": "https://videos.example.com/2-1",
                    "locked": true
                }
            ]
        }
    ])
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match email {
        ADMIN_EMAIL | STUDENT_EMAIL if password == PASSWORD => {
            let (name, role) = if email == ADMIN_EMAIL {
                ("Ana", "admin")
            } else {
                ("Luis", "student")
            };
            Json(json!({
                "token": format!("token-{}", name.to_lowercase()),
                "nombre": name,
                "email": email,
                "rol": role
            }))
            .into_response()
        }
        ADMIN_EMAIL | STUDENT_EMAIL => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Incorrect password" })),
        )
            .into_response(),
        "bare-400@example.com" => StatusCode::BAD_REQUEST.into_response(),
        "broken@example.com" => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        "teapot@example.com" => (
            StatusCode::IM_A_TEAPOT,
            Json(json!({ "error": "Try coffee" })),
        )
            .into_response(),
        "garbled@example.com" => (StatusCode::OK, "not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Usuario no encontrado" })),
        )
            .into_response(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let has_fields = ["nombre", "email", "password"]
        .iter()
        .all(|field| body[*field].is_string());
    if !has_fields {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing fields" })),
        )
            .into_response();
    }

    match body["email"].as_str() {
        Some("taken@example.com") => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Email already registered" })),
        )
            .into_response(),
        Some("silent@example.com") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::CREATED.into_response(),
    }
}

async fn courses(State(mode): State<CoursesMode>) -> Response {
    match mode {
        CoursesMode::Ready => Json(sample_courses()).into_response(),
        CoursesMode::Empty => Json(json!([])).into_response(),
        CoursesMode::Fail => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Starts the fake backend and returns its base URL.
pub async fn spawn_backend(mode: CoursesMode) -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/courses", get(courses))
        .with_state(mode);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn rest_client(base_url: &str) -> RestClient {
    RestClient::new(RestClientConfig::new(base_url).with_timeout(Duration::from_secs(5))).unwrap()
}

/// Session service talking to `base_url`, storing into `store`.
pub fn session_service(base_url: &str, store: Arc<dyn KeyValueStore>) -> Arc<SessionService> {
    Arc::new(SessionService::new(
        store,
        Arc::new(RestAuthApi::new(rest_client(base_url))),
    ))
}

/// Fully wired context against `base_url` with in-memory storage.
pub fn app_context(base_url: &str) -> AppContext {
    AppContext::builder()
        .session(session_service(
            base_url,
            Arc::new(InMemoryKeyValueStore::new()),
        ))
        .catalog(Arc::new(RestCourseCatalog::new(rest_client(base_url))))
        .build()
}
