//! Linkscope diagnostic engine.
//!
//! Determines why a wireless link (client radio → base radio → gateway) is
//! degraded or down:
//! - **tools** — ping/SNMP port traits plus the fping and net-snmp backends
//! - **prober** — one reachability check per hop, packet-loss extraction
//! - **sampler** — dual-chain RSSI reads normalized into one dBm sample
//! - **radio** — reachability + repeated sampling → stability classification
//! - **topology** — client/base/gateway address derivation from inventory
//! - **orchestrator** — concurrent three-hop fan-out and the root-cause
//!   decision table
//! - **sweep** — batched bulk reachability sweeps
//! - **testtools** — scripted tool doubles for tests
//!
//! The engine never returns errors: every failure (missing tool, timeout,
//! unparsable output, absent inventory row) degrades the corresponding
//! field to its sentinel value, so a diagnosis always completes.

pub mod orchestrator;
pub mod prober;
pub mod radio;
pub mod sampler;
pub mod sweep;
pub mod testtools;
pub mod tools;
pub mod topology;

pub use orchestrator::LinkDiagnostics;
