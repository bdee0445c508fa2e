//! Diagnosis orchestrator — concurrent three-hop fan-out and the
//! root-cause decision table.

use std::collections::BTreeMap;
use std::sync::Arc;

use linkscope_common::config::DiagConfig;
use linkscope_common::models::{
    DiagnosisVerdict, FinalStatus, HopReport, HopStatus, InventoryRecord, Stability, SweepResult,
    TopologySummary,
};

use crate::prober;
use crate::radio;
use crate::sweep;
use crate::tools::{PingTool, SnmpTool};
use crate::topology::Topology;

/// Canonical hop names. The dashboard keys off these strings.
pub const CLIENT_RADIO: &str = "Client Radio";
pub const BASE_RADIO: &str = "Base Radio";
pub const GATEWAY: &str = "Gateway (GW)";

/// The diagnostic engine: the two tool ports plus the probe configuration.
/// Cheap to clone; all state is per-diagnosis.
#[derive(Debug, Clone)]
pub struct LinkDiagnostics<P, S> {
    ping: P,
    snmp: S,
    cfg: Arc<DiagConfig>,
}

impl<P: PingTool, S: SnmpTool> LinkDiagnostics<P, S> {
    pub fn new(ping: P, snmp: S, cfg: DiagConfig) -> Self {
        Self {
            ping,
            snmp,
            cfg: Arc::new(cfg),
        }
    }

    /// Run one full diagnosis for `client_addr`.
    ///
    /// All three hop evaluations start together and all three run to
    /// completion — an early verdict-determining result does not cancel
    /// the remaining probes, their evidence is still reported. The three
    /// tasks share nothing; results are combined only after the join.
    pub async fn diagnose(
        &self,
        client_addr: &str,
        records: &[InventoryRecord],
    ) -> DiagnosisVerdict {
        let topology = Topology::resolve(client_addr, records);
        tracing::info!(
            client = %topology.client,
            base = %topology.base,
            gateway = %topology.gateway,
            "starting diagnosis"
        );

        let client_eval =
            radio::evaluate_radio(&self.ping, &self.snmp, &self.cfg, CLIENT_RADIO, &topology.client);
        let base_eval =
            radio::evaluate_radio(&self.ping, &self.snmp, &self.cfg, BASE_RADIO, &topology.base);
        let gateway_eval = prober::probe_hop(&self.ping, GATEWAY, &topology.gateway);

        let (client, base, gateway) = tokio::join!(client_eval, base_eval, gateway_eval);

        let mut steps = vec![client, base, gateway];
        sort_canonical(&mut steps);

        let (final_status, cause) = decide(&steps);
        tracing::info!(
            client = %topology.client,
            final_status = %final_status,
            cause = %cause,
            "diagnosis complete"
        );

        let topology = TopologySummary {
            client: steps[0].clone(),
            base: steps[1].clone(),
            gw: steps[2].clone(),
        };
        DiagnosisVerdict {
            final_status,
            cause: cause.to_string(),
            steps,
            topology,
        }
    }

    /// Bulk reachability sweep (see [`crate::sweep`]).
    pub async fn sweep(&self, addresses: &[String]) -> BTreeMap<String, SweepResult> {
        sweep::sweep(&self.ping, addresses).await
    }
}

fn hop_rank(target_name: &str) -> u8 {
    match target_name {
        CLIENT_RADIO => 0,
        BASE_RADIO => 1,
        GATEWAY => 2,
        _ => 3,
    }
}

/// Reorder hop reports into canonical order [client, base, gateway],
/// whatever order they completed in. Unrecognized names sort last.
pub(crate) fn sort_canonical(steps: &mut [HopReport]) {
    steps.sort_by_key(|s| hop_rank(&s.target_name));
}

/// The 5-branch root-cause table, first matching branch wins. DOWN, ERROR
/// and SKIPPED all count as "not UP".
fn decide(steps: &[HopReport]) -> (FinalStatus, &'static str) {
    let (client, base, gateway) = (&steps[0], &steps[1], &steps[2]);
    let client_unstable = client
        .signal
        .as_ref()
        .is_some_and(|s| s.stability == Stability::Unstable);

    if client.status == HopStatus::Up && client_unstable {
        (FinalStatus::Unstable, "Client Signal Fluctuating")
    } else if client.status == HopStatus::Up {
        (FinalStatus::LinkUp, "Link Optimal.")
    } else if base.status == HopStatus::Up {
        (FinalStatus::ClientDown, "Base is UP. Client Unreachable.")
    } else if gateway.status == HopStatus::Up {
        (FinalStatus::SectorDown, "Gateway UP. Base Radio DOWN.")
    } else {
        (FinalStatus::PopIssue, "Gateway Unreachable.")
    }
}
