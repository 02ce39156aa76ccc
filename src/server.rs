//! HTTP transport: `POST /sort` with a [SortRequest] body.
//!
//! Successful requests are answered with the sorted payload. Failures are answered with
//! `{"error": "<message>"}`, status 400 for invalid requests, 413 for bodies over the configured
//! limit and 500 for engine failures.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::error::SortError;
use crate::request::{SortRequest, INVALID_JSON};
use crate::sort::Sort;

/// Build the router serving `POST /sort` with the given [Sort] definition. Request bodies are
/// limited to `max_body_bytes`, `None` accepts bodies of any size.
pub fn router(sort: Sort, max_body_bytes: Option<usize>) -> Router {
    let body_limit = match max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };
    Router::new()
        .route("/sort", post(sort_handler))
        .layer(body_limit)
        .with_state(Arc::new(sort))
}

async fn sort_handler(State(sort): State<Arc<Sort>>, body: Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            log::debug!("Failed to read sort request body: {}", e.body_text());
            return error_response(e.status(), &e.body_text());
        }
    };
    let request: SortRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejected sort request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, INVALID_JSON);
        }
    };

    if let Err(e) = request.validate() {
        return sort_error_response(e);
    }

    let SortRequest { sort_keys, payload } = request;
    let payload = payload.unwrap_or_default();
    // the engine blocks on its worker pool
    let sorted = tokio::task::spawn_blocking(move || sort.sort(&payload, &sort_keys)).await;
    match sorted {
        Ok(Ok(sorted)) => (StatusCode::OK, Json(sorted)).into_response(),
        Ok(Err(e)) => sort_error_response(e),
        Err(e) => {
            log::error!("Sort task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "sort task failed")
        }
    }
}

fn sort_error_response(error: SortError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        log::warn!("Sort request failed: {}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, &error.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
