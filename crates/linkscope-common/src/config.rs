//! Probe configuration.
//!
//! All the tunables the diagnostic engine depends on: fping packet counts,
//! the SNMP community and OIDs for the dual-chain signal read and the LAN
//! speed read, sampling cadence, and the stability thresholds. Defaults
//! reproduce the values the NOC has run in the field; a TOML file can
//! override any subset of them.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagConfig {
    /// SNMP v2c community for telemetry reads.
    pub snmp_community: String,
    /// RSSI of antenna chain 0, in tenths of a dBm.
    pub chain_a_oid: String,
    /// RSSI of antenna chain 1, in tenths of a dBm.
    pub chain_b_oid: String,
    /// ifSpeed of the radio's LAN port, in bits/sec.
    pub lan_speed_oid: String,
    /// Signal samples taken per radio evaluation.
    pub sample_count: u32,
    /// Pause after each sample attempt, so consecutive reads don't collide
    /// on the device's SNMP agent.
    pub sample_pause_ms: u64,
    /// Packets per fping round.
    pub ping_count: u32,
    /// Per-packet reply timeout handed to fping.
    pub ping_timeout_ms: u64,
    /// Inter-packet interval handed to fping.
    pub ping_interval_ms: u64,
    /// Sample spread below this is classified Stable.
    pub stable_spread_dbm: f64,
    /// Sample spread at or above this is classified Unstable.
    pub unstable_spread_dbm: f64,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            snmp_community: "airspan".into(),
            chain_a_oid: "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.1".into(),
            chain_b_oid: "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.2".into(),
            lan_speed_oid: "1.3.6.1.2.1.2.2.1.5.1".into(),
            sample_count: 3,
            sample_pause_ms: 200,
            ping_count: 5,
            ping_timeout_ms: 500,
            ping_interval_ms: 25,
            stable_spread_dbm: 2.5,
            unstable_spread_dbm: 6.0,
        }
    }
}

impl DiagConfig {
    /// Load from a TOML file. Keys not present fall back to the defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: DiagConfig =
            toml::from_str("snmp_community = \"public\"\nping_count = 3\n").unwrap();
        assert_eq!(cfg.snmp_community, "public");
        assert_eq!(cfg.ping_count, 3);
        assert_eq!(cfg.sample_count, 3);
        assert_eq!(cfg.stable_spread_dbm, 2.5);
        assert_eq!(cfg.unstable_spread_dbm, 6.0);
    }

    #[test]
    fn defaults_carry_field_values() {
        let cfg = DiagConfig::default();
        assert_eq!(cfg.chain_a_oid, "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.1");
        assert_eq!(cfg.chain_b_oid, "1.3.6.1.4.1.43356.2.1.2.6.1.1.3.2");
        assert_eq!(cfg.lan_speed_oid, "1.3.6.1.2.1.2.2.1.5.1");
        assert_eq!(cfg.ping_timeout_ms, 500);
        assert_eq!(cfg.sample_pause_ms, 200);
    }
}
