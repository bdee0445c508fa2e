//! Signal sampler — dual-chain RSSI reads folded into one dBm sample.

use linkscope_common::config::DiagConfig;

use crate::tools::SnmpTool;

/// Read one antenna chain and normalize it to a dBm value.
async fn read_chain_dbm<S: SnmpTool>(snmp: &S, address: &str, oid: &str) -> Option<f64> {
    let raw = snmp.get(address, oid).await?;
    let value: f64 = raw.trim().parse().ok()?;
    Some(normalize_chain(value))
}

/// Take one signal sample: both chains must answer, the sample is their
/// arithmetic mean. `None` if either chain is missing or unparsable.
pub async fn sample_signal<S: SnmpTool>(
    snmp: &S,
    cfg: &DiagConfig,
    address: &str,
) -> Option<f64> {
    let a = read_chain_dbm(snmp, address, &cfg.chain_a_oid).await?;
    let b = read_chain_dbm(snmp, address, &cfg.chain_b_oid).await?;
    Some((a + b) / 2.0)
}

/// Raw chain readings are tenths of a dBm and may arrive as an unsigned
/// magnitude; RSSI is conventionally non-positive. The second sign check
/// looks redundant but the upstream sign convention is unverified, so the
/// field-proven normalization is kept exactly as-is.
fn normalize_chain(raw: f64) -> f64 {
    let value = if raw > 0.0 { raw / 10.0 * -1.0 } else { raw / 10.0 };
    if value > 0.0 {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testtools::ScriptedSnmp;

    const CHAIN_A: &str = "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.1";
    const CHAIN_B: &str = "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.2";

    #[test]
    fn normalization_is_never_positive() {
        for raw in [415.0, -415.0, 0.0, 7.0, -0.5, 1000.0] {
            assert!(normalize_chain(raw) <= 0.0, "raw {raw} produced a positive dBm");
        }
    }

    #[test]
    fn unsigned_magnitudes_are_negated() {
        assert_eq!(normalize_chain(410.0), -41.0);
        assert_eq!(normalize_chain(-410.0), -41.0);
        assert_eq!(normalize_chain(0.0), 0.0);
    }

    #[tokio::test]
    async fn sample_is_mean_of_both_chains() {
        let cfg = DiagConfig::default();
        let snmp = ScriptedSnmp::new();
        snmp.set("10.0.0.10", CHAIN_A, "410");
        snmp.set("10.0.0.10", CHAIN_B, "430");
        assert_eq!(sample_signal(&snmp, &cfg, "10.0.0.10").await, Some(-42.0));
    }

    #[tokio::test]
    async fn missing_chain_drops_the_sample() {
        let cfg = DiagConfig::default();
        let snmp = ScriptedSnmp::new();
        snmp.set("10.0.0.10", CHAIN_A, "410");
        assert_eq!(sample_signal(&snmp, &cfg, "10.0.0.10").await, None);
    }

    #[tokio::test]
    async fn unparsable_chain_drops_the_sample() {
        let cfg = DiagConfig::default();
        let snmp = ScriptedSnmp::new();
        snmp.set("10.0.0.10", CHAIN_A, "410");
        snmp.set("10.0.0.10", CHAIN_B, "No Such Instance");
        assert_eq!(sample_signal(&snmp, &cfg, "10.0.0.10").await, None);
    }
}
