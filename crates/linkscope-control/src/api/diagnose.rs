//! Diagnosis endpoint.
//!
//! POST /api/diagnose — run the three-hop diagnosis for one client address

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use linkscope_common::models::DiagnosisVerdict;
use linkscope_diag::tools::{PingTool, SnmpTool};

use crate::state::AppState;

pub fn router<P, S>() -> Router<AppState<P, S>>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    Router::new().route("/diagnose", post(run_diagnosis))
}

#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    pub ip: String,
}

async fn run_diagnosis<P, S>(
    State(state): State<AppState<P, S>>,
    Json(body): Json<DiagnoseRequest>,
) -> Json<DiagnosisVerdict>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    // One inventory read, before the probe fan-out.
    let records = state.store.load_all();
    let verdict = state.diag.diagnose(&body.ip, &records).await;
    Json(verdict)
}
