//! Reachability prober — one probe round per hop, loss extraction.

use linkscope_common::models::{HopReport, HopStatus};

use crate::tools::PingTool;

/// Address sentinel used wherever a hop has nothing to probe.
pub const UNKNOWN_ADDR: &str = "N/A";

/// Probe one hop. Never fails: an unprobeable address is SKIPPED without
/// any network I/O, a tool invocation failure is ERROR.
pub async fn probe_hop<P: PingTool>(ping: &P, name: &str, address: &str) -> HopReport {
    if address.is_empty() || address == UNKNOWN_ADDR {
        return HopReport {
            target_name: name.to_string(),
            address: UNKNOWN_ADDR.to_string(),
            status: HopStatus::Skipped,
            packet_loss: "N/A".to_string(),
            signal: None,
        };
    }

    match ping.ping(address).await {
        Ok(outcome) => {
            let status = if outcome.success {
                HopStatus::Up
            } else {
                HopStatus::Down
            };
            // Loss extraction must never fail the probe; an unparsable
            // summary degrades to the pessimistic value.
            let packet_loss =
                parse_loss(&outcome.diagnostics).unwrap_or_else(|| "100%".to_string());
            tracing::debug!(
                target = %name,
                address = %address,
                status = %status,
                loss = %packet_loss,
                "hop probed"
            );
            HopReport {
                target_name: name.to_string(),
                address: address.to_string(),
                status,
                packet_loss,
                signal: None,
            }
        }
        Err(e) => {
            tracing::warn!(
                target = %name,
                address = %address,
                error = %e,
                "ping tool invocation failed"
            );
            HopReport {
                target_name: name.to_string(),
                address: address.to_string(),
                status: HopStatus::Error,
                packet_loss: "?".to_string(),
                signal: None,
            }
        }
    }
}

/// Pull the loss percentage out of an fping summary line:
/// `10.0.0.5 : xmt/rcv/%loss = 5/5/0%, min/avg/max = 0.11/0.19/0.33`
pub(crate) fn parse_loss(diagnostics: &str) -> Option<String> {
    let idx = diagnostics.find("%loss = ")?;
    let rest = &diagnostics[idx + "%loss = ".len()..];
    let stats = rest.split(',').next()?;
    let loss = stats.trim().rsplit('/').next()?.trim();
    let digits = loss.strip_suffix('%')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(loss.to_string())
    } else {
        None
    }
}

/// Pull the average round-trip time out of the `min/avg/max` section of an
/// fping summary line. Only present when at least one packet came back.
pub(crate) fn parse_avg_latency_ms(diagnostics: &str) -> Option<f64> {
    let idx = diagnostics.find("min/avg/max = ")?;
    let rest = &diagnostics[idx + "min/avg/max = ".len()..];
    let stats = rest.split_whitespace().next()?;
    let mut parts = stats.split('/');
    parts.next()?; // min
    parts.next()?.trim().parse().ok()
}
