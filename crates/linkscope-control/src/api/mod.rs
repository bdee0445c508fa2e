//! REST API route tree.

pub mod diagnose;
pub mod inventory;
pub mod ping;

use axum::http::StatusCode;
use axum::{Json, Router};

use linkscope_diag::tools::{PingTool, SnmpTool};

use crate::state::AppState;

/// Build the `/api` router.
pub fn router<P, S>() -> Router<AppState<P, S>>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    Router::new()
        .merge(inventory::router())
        .merge(diagnose::router())
        .merge(ping::router())
}

// ── Error type ──────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}
