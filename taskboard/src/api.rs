//! HTTP API: route table, request handlers, and response mapping.
//!
//! The router is an explicit method+path dispatch table over three
//! resources: the welcome banner at `/`, the collection at `/tasks`, and
//! single tasks at `/tasks/{id}`. Handlers parse the id segment and decode
//! the request body *before* touching the store, so malformed input is
//! rejected without side effects.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use taskboard_model::{NewTask, ParseTaskIdError, Task, TaskId};

use crate::store::{StoreError, TaskStore};

/// Banner returned for `GET /`.
pub const WELCOME: &str = "Welcome to the Go To-Do CRUD API!";

/// Request-local failures, mapped to status codes and plain-text bodies.
///
/// All of these are fully recovered at the HTTP boundary; none are fatal
/// to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The id path segment was not a positive base-10 integer.
    #[error("Invalid task ID")]
    InvalidTaskId,
    /// The request body did not decode into the create-input shape.
    #[error("Invalid request payload")]
    InvalidPayload,
    /// No task exists with the requested id.
    #[error("Task not found")]
    TaskNotFound,
    /// The path is known but the method is not supported on it.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl RequestError {
    const fn status(self) -> StatusCode {
        match self {
            Self::InvalidTaskId | Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<StoreError> for RequestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::TaskNotFound,
        }
    }
}

impl From<ParseTaskIdError> for RequestError {
    fn from(_: ParseTaskIdError) -> Self {
        Self::InvalidTaskId
    }
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn list_tasks(State(store): State<Arc<TaskStore>>) -> Json<Vec<Task>> {
    Json(store.list().await)
}

async fn create_task(
    State(store): State<Arc<TaskStore>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Task>, RequestError> {
    let Ok(Json(input)) = payload else {
        tracing::warn!("rejected create request with undecodable payload");
        return Err(RequestError::InvalidPayload);
    };

    let task = store.create(input).await;
    tracing::info!(id = %task.id, title = %task.title, "task created");
    Ok(Json(task))
}

async fn get_task(
    State(store): State<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, RequestError> {
    let id = parse_id(&raw_id)?;
    let task = store.get(id).await?;
    Ok(Json(task))
}

async fn delete_task(
    State(store): State<Arc<TaskStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let id = parse_id(&raw_id)?;
    store.delete(id).await?;
    tracing::info!(id = %id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Parses the id path segment, logging rejected input.
fn parse_id(raw: &str) -> Result<TaskId, RequestError> {
    raw.parse().map_err(|e: ParseTaskIdError| {
        tracing::warn!(segment = %raw, "rejected request with invalid task id");
        e.into()
    })
}

async fn method_not_allowed() -> RequestError {
    RequestError::MethodNotAllowed
}

async fn unknown_route() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Builds the API router around a shared [`TaskStore`].
///
/// Non-GET methods on `/` fall through to 404; unsupported methods on the
/// task routes answer 405; everything unmatched answers 404.
#[must_use]
pub fn router(store: Arc<TaskStore>) -> axum::Router {
    axum::Router::new()
        .route("/", get(welcome).fallback(unknown_route))
        .route(
            "/tasks",
            get(list_tasks)
                .post(create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{id}",
            get(get_task)
                .delete(delete_task)
                .fallback(method_not_allowed),
        )
        .fallback(unknown_route)
        .with_state(store)
}

/// Starts the API server on the given address with a fresh, empty store.
///
/// Returns the bound address and a join handle. This is the primary entry
/// point used by both `main.rs` and test code.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    start_server_with_state(addr, Arc::new(TaskStore::new())).await
}

/// Starts the API server with a pre-built [`TaskStore`].
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    store: Arc<TaskStore>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "api server error");
        }
    });

    Ok((bound_addr, handle))
}

/// Starts the API server in-process for testing.
///
/// Binds to `127.0.0.1:0` (OS-assigned port) and returns the bound address
/// and a [`tokio::task::JoinHandle`] for cleanup.
#[cfg(test)]
pub async fn start_test_server() -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    start_server("127.0.0.1:0")
        .await
        .expect("failed to start test server")
}
