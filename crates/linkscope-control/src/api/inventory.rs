//! Inventory endpoints.
//!
//! GET  /api/inventory — full record list, in stored order
//! POST /api/inventory — replace the entire store with the posted list

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use linkscope_common::models::InventoryRecord;
use linkscope_diag::tools::{PingTool, SnmpTool};

use crate::api::ApiError;
use crate::state::AppState;

pub fn router<P, S>() -> Router<AppState<P, S>>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    Router::new().route("/inventory", get(list_inventory).post(replace_inventory))
}

async fn list_inventory<P, S>(State(state): State<AppState<P, S>>) -> Json<Vec<InventoryRecord>>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    Json(state.store.load_all())
}

#[derive(Debug, Serialize)]
pub struct ReplaceInventoryResponse {
    pub status: &'static str,
    pub count: usize,
}

async fn replace_inventory<P, S>(
    State(state): State<AppState<P, S>>,
    Json(records): Json<Vec<InventoryRecord>>,
) -> Result<Json<ReplaceInventoryResponse>, ApiError>
where
    P: PingTool + Clone + 'static,
    S: SnmpTool + Clone + 'static,
{
    state
        .store
        .save_all(&records)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    tracing::info!(count = records.len(), "inventory replaced");

    Ok(Json(ReplaceInventoryResponse {
        status: "success",
        count: records.len(),
    }))
}
