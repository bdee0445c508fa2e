//! Topology resolver — the three addresses under test for one client.

use std::net::Ipv4Addr;

use linkscope_common::models::InventoryRecord;

use crate::prober::UNKNOWN_ADDR;

/// The client/base/gateway addressing for one diagnosis. Unresolvable
/// entries hold the "N/A" sentinel and will be SKIPPED by the prober.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub client: String,
    pub base: String,
    pub gateway: String,
}

impl Topology {
    /// Derive the topology for `client_addr` from the inventory: the base
    /// radio comes from the record whose `Client_IP` matches exactly, and
    /// the gateway sits one address below the base (site addressing
    /// convention). Lookup misses and malformed addresses degrade to
    /// "N/A"; this never fails.
    pub fn resolve(client_addr: &str, records: &[InventoryRecord]) -> Self {
        let base = records
            .iter()
            .find(|r| r.client_ip() == Some(client_addr))
            .and_then(|r| r.base_ip())
            .unwrap_or(UNKNOWN_ADDR)
            .to_string();

        let gateway = derive_gateway(&base).unwrap_or_else(|| UNKNOWN_ADDR.to_string());

        Self {
            client: client_addr.to_string(),
            base,
            gateway,
        }
    }
}

/// Whole-address decrement: 10.0.1.0 → 10.0.0.255, and only 0.0.0.0
/// underflows.
fn derive_gateway(base: &str) -> Option<String> {
    let addr: Ipv4Addr = base.parse().ok()?;
    let below = u32::from(addr).checked_sub(1)?;
    Some(Ipv4Addr::from(below).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(client_ip: &str, base_ip: &str) -> InventoryRecord {
        serde_json::from_value(json!({ "Client_IP": client_ip, "Base_IP": base_ip })).unwrap()
    }

    #[test]
    fn gateway_sits_one_below_the_base() {
        let records = vec![record("10.0.0.10", "10.0.0.5")];
        let topo = Topology::resolve("10.0.0.10", &records);
        assert_eq!(topo.client, "10.0.0.10");
        assert_eq!(topo.base, "10.0.0.5");
        assert_eq!(topo.gateway, "10.0.0.4");
    }

    #[test]
    fn lookup_miss_degrades_everything_downstream() {
        let records = vec![record("10.0.0.10", "10.0.0.5")];
        let topo = Topology::resolve("192.168.1.1", &records);
        assert_eq!(topo.base, "N/A");
        assert_eq!(topo.gateway, "N/A");
    }

    #[test]
    fn sentinel_base_yields_sentinel_gateway() {
        let records = vec![record("10.0.0.10", "N/A")];
        let topo = Topology::resolve("10.0.0.10", &records);
        assert_eq!(topo.gateway, "N/A");
    }

    #[test]
    fn record_without_base_column_is_tolerated() {
        let records =
            vec![serde_json::from_value(json!({ "Client_IP": "10.0.0.10" })).unwrap()];
        let topo = Topology::resolve("10.0.0.10", &records);
        assert_eq!(topo.base, "N/A");
        assert_eq!(topo.gateway, "N/A");
    }

    #[test]
    fn zero_address_underflow_is_guarded() {
        let records = vec![record("10.0.0.10", "0.0.0.0")];
        let topo = Topology::resolve("10.0.0.10", &records);
        assert_eq!(topo.gateway, "N/A");
    }

    #[test]
    fn decrement_borrows_across_octets() {
        let records = vec![record("10.0.0.10", "10.0.1.0")];
        let topo = Topology::resolve("10.0.0.10", &records);
        assert_eq!(topo.gateway, "10.0.0.255");
    }
}
