//! Bulk reachability sweep — probe a list of addresses in parallel batches.
//!
//! Used by the dashboard's search view to light up many links at once.
//! Addresses are deduplicated and filtered to IPv4 literals before
//! probing; batching keeps a large inventory from fork-bombing the host
//! with probe processes.

use std::collections::{BTreeMap, HashSet};
use std::net::Ipv4Addr;

use futures::future::join_all;

use linkscope_common::models::SweepResult;

use crate::prober;
use crate::tools::PingTool;

/// Probes launched concurrently per batch.
const SWEEP_BATCH: usize = 50;

/// Sweep the given addresses. Non-IPv4 entries and duplicates are dropped;
/// the result map is keyed by address.
pub async fn sweep<P: PingTool>(ping: &P, addresses: &[String]) -> BTreeMap<String, SweepResult> {
    let mut seen = HashSet::new();
    let targets: Vec<&str> = addresses
        .iter()
        .map(String::as_str)
        .filter(|a| a.parse::<Ipv4Addr>().is_ok())
        .filter(|a| seen.insert(*a))
        .collect();

    tracing::info!(requested = addresses.len(), probing = targets.len(), "reachability sweep");

    let mut results = BTreeMap::new();
    for batch in targets.chunks(SWEEP_BATCH) {
        let probes = batch.iter().map(|addr| probe_one(ping, addr));
        for (addr, result) in batch.iter().zip(join_all(probes).await) {
            results.insert((*addr).to_string(), result);
        }
    }
    results
}

async fn probe_one<P: PingTool>(ping: &P, address: &str) -> SweepResult {
    match ping.ping(address).await {
        Ok(outcome) if outcome.success => SweepResult {
            alive: true,
            loss_pct: parse_loss_pct(&outcome.diagnostics).unwrap_or(0),
            latency_ms: prober::parse_avg_latency_ms(&outcome.diagnostics),
        },
        _ => SweepResult {
            alive: false,
            loss_pct: 100,
            latency_ms: None,
        },
    }
}

fn parse_loss_pct(diagnostics: &str) -> Option<u8> {
    prober::parse_loss(diagnostics)?
        .strip_suffix('%')?
        .parse()
        .ok()
}
