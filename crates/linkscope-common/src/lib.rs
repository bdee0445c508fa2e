//! Shared types for the Linkscope platform.
//!
//! This crate contains:
//! - **Data models** — hop reports, signal readings, diagnosis verdicts,
//!   inventory records (the wire shapes served by the control plane)
//! - **Probe configuration** — `DiagConfig` with the fping/SNMP constants
//!   and stability thresholds, loadable from a TOML file

pub mod config;
pub mod models;
