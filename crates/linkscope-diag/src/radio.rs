//! Radio health evaluator — reachability plus signal stability for one hop.

use std::time::Duration;

use linkscope_common::config::DiagConfig;
use linkscope_common::models::{HopReport, HopStatus, SignalReading, Stability};

use crate::prober;
use crate::sampler;
use crate::tools::{PingTool, SnmpTool};

/// Evaluate one radio hop: probe reachability, then (only if UP) collect
/// paced signal samples and the LAN speed. The returned report always
/// carries a `SignalReading`; every sub-failure degrades a field rather
/// than failing the evaluation.
pub async fn evaluate_radio<P: PingTool, S: SnmpTool>(
    ping: &P,
    snmp: &S,
    cfg: &DiagConfig,
    name: &str,
    address: &str,
) -> HopReport {
    let mut report = prober::probe_hop(ping, name, address).await;
    if report.status != HopStatus::Up {
        report.signal = Some(SignalReading {
            rssi_display: "N/A".to_string(),
            stability: Stability::Offline,
            lan_speed_mbps: None,
        });
        return report;
    }

    let mut samples = Vec::with_capacity(cfg.sample_count as usize);
    for _ in 0..cfg.sample_count {
        if let Some(value) = sampler::sample_signal(snmp, cfg, address).await {
            samples.push(value);
        }
        // Pacing between reads; consecutive GETs can collide on the
        // device's SNMP agent.
        tokio::time::sleep(Duration::from_millis(cfg.sample_pause_ms)).await;
    }

    let (rssi_display, stability) = classify(&samples, cfg);
    let lan_speed_mbps = read_lan_speed(snmp, cfg, address).await;
    tracing::debug!(
        target = %name,
        address = %address,
        samples = samples.len(),
        stability = %stability,
        rssi = %rssi_display,
        "radio evaluated"
    );

    report.signal = Some(SignalReading {
        rssi_display,
        stability,
        lan_speed_mbps,
    });
    report
}

/// Classify the usable samples by their spread (max − min).
fn classify(samples: &[f64], cfg: &DiagConfig) -> (String, Stability) {
    if samples.is_empty() {
        return ("N/A".to_string(), Stability::Unknown);
    }

    let avg = samples.iter().sum::<f64>() / samples.len() as f64;
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;

    if spread < cfg.stable_spread_dbm {
        (format!("{avg:.1} dBm"), Stability::Stable)
    } else if spread < cfg.unstable_spread_dbm {
        (format!("{avg:.1} dBm (±{spread:.1})"), Stability::Jittery)
    } else {
        (format!("{min:.1} ~ {max:.1} dBm"), Stability::Unstable)
    }
}

/// ifSpeed in bits/sec → whole Mbps. Runs regardless of the stability
/// outcome; any failure leaves the field unreadable.
async fn read_lan_speed<S: SnmpTool>(snmp: &S, cfg: &DiagConfig, address: &str) -> Option<u64> {
    let raw = snmp.get(address, &cfg.lan_speed_oid).await?;
    let bits: u64 = raw.trim().parse().ok()?;
    Some(bits / 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testtools::{ScriptedPing, ScriptedSnmp};

    const CHAIN_A: &str = "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.1";
    const CHAIN_B: &str = "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.2";
    const LAN_SPEED: &str = "1.3.6.1.2.1.2.2.1.5.1";

    fn fast_cfg() -> DiagConfig {
        DiagConfig {
            sample_pause_ms: 0,
            ..DiagConfig::default()
        }
    }

    #[tokio::test]
    async fn unreachable_radio_never_touches_snmp() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.down("10.0.0.10");

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        let signal = report.signal.expect("radio hop carries a signal reading");
        assert_eq!(report.status, HopStatus::Down);
        assert_eq!(signal.stability, Stability::Offline);
        assert_eq!(signal.rssi_display, "N/A");
        assert_eq!(signal.lan_speed_mbps, None);
        assert!(snmp.calls().is_empty());
    }

    #[tokio::test]
    async fn tight_samples_classify_stable() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.up("10.0.0.10");
        // Samples -40.0, -41.0, -40.5 → spread 1.0.
        snmp.set_series("10.0.0.10", CHAIN_A, &["400", "410", "405"]);
        snmp.set_series("10.0.0.10", CHAIN_B, &["400", "410", "405"]);
        snmp.set("10.0.0.10", LAN_SPEED, "100000000");

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        let signal = report.signal.unwrap();
        assert_eq!(signal.stability, Stability::Stable);
        assert_eq!(signal.rssi_display, "-40.5 dBm");
        assert_eq!(signal.lan_speed_mbps, Some(100));
    }

    #[tokio::test]
    async fn moderate_spread_classifies_jittery() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.up("10.0.0.10");
        // Samples -40, -44, -41 → spread 4.0.
        snmp.set_series("10.0.0.10", CHAIN_A, &["400", "440", "410"]);
        snmp.set_series("10.0.0.10", CHAIN_B, &["400", "440", "410"]);

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        let signal = report.signal.unwrap();
        assert_eq!(signal.stability, Stability::Jittery);
        assert_eq!(signal.rssi_display, "-41.7 dBm (±4.0)");
    }

    #[tokio::test]
    async fn wide_spread_classifies_unstable_with_range_display() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.up("10.0.0.10");
        // Samples -40, -50, -41 → spread 10.0.
        snmp.set_series("10.0.0.10", CHAIN_A, &["400", "500", "410"]);
        snmp.set_series("10.0.0.10", CHAIN_B, &["400", "500", "410"]);

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        let signal = report.signal.unwrap();
        assert_eq!(signal.stability, Stability::Unstable);
        assert_eq!(signal.rssi_display, "-50.0 ~ -40.0 dBm");
    }

    #[tokio::test]
    async fn no_usable_samples_is_unknown_but_lan_speed_still_read() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.up("10.0.0.10");
        // Chains unscripted — every sample read fails.
        snmp.set("10.0.0.10", LAN_SPEED, "10000000");

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        let signal = report.signal.unwrap();
        assert_eq!(report.status, HopStatus::Up);
        assert_eq!(signal.stability, Stability::Unknown);
        assert_eq!(signal.rssi_display, "N/A");
        assert_eq!(signal.lan_speed_mbps, Some(10));
    }

    #[tokio::test]
    async fn unparsable_lan_speed_degrades_to_none() {
        let cfg = fast_cfg();
        let ping = ScriptedPing::new();
        let snmp = ScriptedSnmp::new();
        ping.up("10.0.0.10");
        snmp.set_series("10.0.0.10", CHAIN_A, &["400"]);
        snmp.set_series("10.0.0.10", CHAIN_B, &["400"]);
        snmp.set("10.0.0.10", LAN_SPEED, "not-a-number");

        let report = evaluate_radio(&ping, &snmp, &cfg, "Client Radio", "10.0.0.10").await;
        assert_eq!(report.signal.unwrap().lan_speed_mbps, None);
    }
}
