//! HTTP surface - routing, request/response types, error mapping
//!
//! Thin axum wrappers over the store, extractors, and retrieval engine.
//! Endpoint paths and body shapes are frozen for compatibility with
//! existing clients, trailing slashes included.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::error::Error;
use crate::extract::{pdf, WebExtractor};
use crate::retrieval::{Embedder, RetrievalEngine};
use crate::store::DocumentStore;

/// Uploads above this size are rejected before extraction
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

// ---- App State ----

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    store: DocumentStore,
    engine: RetrievalEngine,
    web: WebExtractor,
}

impl AppState {
    /// Assemble the service around an embedding backend
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        AppState {
            store: DocumentStore::new(),
            engine: RetrievalEngine::new(embedder),
            web: WebExtractor::new(),
        }
    }

    /// Access the document store (used by tests and diagnostics)
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}

// ---- Error Handling ----

/// Boundary adapter: converts crate errors into HTTP responses
struct AppError(Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if matches!(self.0, Error::NotFound(_)) {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self.0);
        }

        let body = Json(serde_json::json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}

// ---- Request / Response Types ----

#[derive(Deserialize)]
struct UrlInput {
    url: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    chat_id: String,
    question: String,
}

#[derive(Serialize)]
struct IngestResponse {
    chat_id: String,
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    response: String,
}

// ---- Handlers ----

async fn read_root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the FastAPI application!" }))
}

async fn process_url(
    State(state): State<AppState>,
    Json(input): Json<UrlInput>,
) -> Result<Json<IngestResponse>, AppError> {
    let text = state.web.fetch_text(&input.url).await?;

    // The URL itself is the document identifier; re-ingestion overwrites.
    state.store.put(&input.url, text).await;
    info!(url = %input.url, "stored url content");

    Ok(Json(IngestResponse {
        chat_id: input.url,
        message: "URL content processed and stored successfully.".to_string(),
    }))
}

async fn process_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidInput(format!("malformed multipart body: {e}")))?
        .ok_or_else(|| Error::InvalidInput("no file in upload".to_string()))?;

    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidInput("upload is missing a filename".to_string()))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|e| Error::InvalidInput(format!("failed to read upload: {e}")))?;

    // pdf parsing is CPU-bound, keep it off the I/O threads
    let name = filename.clone();
    let text = tokio::task::spawn_blocking(move || pdf::extract_text(&name, &bytes))
        .await
        .map_err(|e| Error::Internal(format!("extraction task join error: {e}")))??;

    state.store.put(&filename, text).await;
    info!(filename = %filename, "stored pdf content");

    Ok(Json(IngestResponse {
        chat_id: filename,
        message: "PDF content processed and stored successfully.".to_string(),
    }))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let content = state
        .store
        .get(&request.chat_id)
        .await
        .filter(|content| !content.is_empty())
        .ok_or_else(|| Error::NotFound("Chat ID not found.".to_string()))?;

    let response = state.engine.answer(&content, &request.question).await?;
    Ok(Json(ChatResponse { response }))
}

// ---- Router ----

/// Build the application router over shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/process_url/", post(process_url))
        .route("/process_pdf/", post(process_pdf))
        .route("/chat/", post(chat))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
