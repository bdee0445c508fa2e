//! Linkscope Control Plane
//!
//! Single binary that runs:
//! - REST API for the NOC dashboard (inventory, diagnosis, bulk ping)
//! - Static hosting for the prebuilt UI bundle

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use linkscope_common::config::DiagConfig;
use linkscope_control::{api, state, store};
use linkscope_diag::tools::{FpingTool, NetSnmpTool};
use linkscope_diag::LinkDiagnostics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Probe configuration ─────────────────────────────────────
    let cfg = match std::env::var("LINKSCOPE_CONFIG") {
        Ok(path) => DiagConfig::from_toml_file(&path)
            .map_err(|e| anyhow::anyhow!("failed to load {path}: {e}"))?,
        Err(_) => DiagConfig::default(),
    };

    // ── Inventory store ─────────────────────────────────────────
    let inventory_path =
        std::env::var("LINKSCOPE_INVENTORY").unwrap_or_else(|_| "inventory.json".into());
    let store = Arc::new(store::JsonFileStore::new(&inventory_path));

    // ── Diagnostic engine with the real network tools ───────────
    let ping = FpingTool::new(&cfg);
    let snmp = NetSnmpTool::new(&cfg);
    let diag = LinkDiagnostics::new(ping, snmp, cfg);

    let state = state::AppState::new(store, diag);

    // ── Router ──────────────────────────────────────────────────
    // UI: serve the prebuilt dashboard bundle from a directory, with an
    // SPA fallback to index.html.
    let ui_dir = std::env::var("LINKSCOPE_UI_DIR").unwrap_or_else(|_| "static".into());

    let spa_fallback = ServeFile::new(format!("{ui_dir}/index.html"));
    let ui_service = ServeDir::new(&ui_dir).not_found_service(spa_fallback);

    let app = Router::new()
        .nest("/api", api::router())
        .fallback_service(ui_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // ── Listen ──────────────────────────────────────────────────
    let addr: SocketAddr = std::env::var("LINKSCOPE_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".into())
        .parse()?;

    tracing::info!(%addr, inventory = %inventory_path, "linkscope-control listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
