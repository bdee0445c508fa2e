//! Bulk reachability endpoint.
//!
//! POST /api/ping — sweep a list of addresses, results keyed by address

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use linkscope_common::models::SweepResult;
use linkscope_diag::tools::{PingTool, SnmpTool};

use crate::api::ApiError;
use crate::state::AppState;

pub fn router<P, S>() -> Router<AppState<P, S>>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    Router::new().route("/ping", post(run_sweep))
}

#[derive(Debug, Deserialize)]
pub struct SweepRequest {
    pub ips: Vec<String>,
}

async fn run_sweep<P, S>(
    State(state): State<AppState<P, S>>,
    Json(body): Json<SweepRequest>,
) -> Result<Json<BTreeMap<String, SweepResult>>, ApiError>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    if body.ips.is_empty() {
        return Err(ApiError::bad_request("empty address list"));
    }
    Ok(Json(state.diag.sweep(&body.ips).await))
}
