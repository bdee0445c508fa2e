//! Data models for the Linkscope platform.
//!
//! These types are the wire shapes exchanged between the control plane and
//! the NOC dashboard. Field names and sentinel values are part of the API
//! contract; the dashboard renders them verbatim.

use serde::{Deserialize, Serialize, Serializer};

// ── Hop reports ─────────────────────────────────────────────────────

/// Reachability status of a single hop under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HopStatus {
    Up,
    Down,
    /// No address to probe — no network I/O was attempted.
    Skipped,
    /// The probe tool itself could not be invoked.
    Error,
}

impl std::fmt::Display for HopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HopStatus::Up => write!(f, "UP"),
            HopStatus::Down => write!(f, "DOWN"),
            HopStatus::Skipped => write!(f, "SKIPPED"),
            HopStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Signal-strength variance classification across repeated samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    Jittery,
    Unstable,
    /// The hop failed reachability; no samples were taken.
    Offline,
    /// The hop was reachable but no sample could be read.
    Unknown,
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stability::Stable => write!(f, "Stable"),
            Stability::Jittery => write!(f, "Jittery"),
            Stability::Unstable => write!(f, "Unstable"),
            Stability::Offline => write!(f, "Offline"),
            Stability::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Signal-quality evidence for a radio hop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReading {
    /// Human-readable RSSI summary ("-40.5 dBm", "-50.0 ~ -40.0 dBm", "N/A").
    pub rssi_display: String,
    pub stability: Stability,
    /// Negotiated LAN speed in whole Mbps; "N/A" on the wire when unreadable.
    #[serde(serialize_with = "na_if_none")]
    pub lan_speed_mbps: Option<u64>,
}

/// Per-hop probe evidence. Radio hops carry a `SignalReading`; the gateway
/// hop never does, so `signal` is omitted from its JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HopReport {
    pub target_name: String,
    pub address: String,
    pub status: HopStatus,
    pub packet_loss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<SignalReading>,
}

fn na_if_none<S: Serializer>(value: &Option<u64>, ser: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => ser.serialize_u64(*v),
        None => ser.serialize_str("N/A"),
    }
}

// ── Diagnosis verdict ───────────────────────────────────────────────

/// Terminal outcome of the 5-branch root-cause decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FinalStatus {
    #[serde(rename = "LINK UP")]
    LinkUp,
    #[serde(rename = "UNSTABLE")]
    Unstable,
    #[serde(rename = "CLIENT DOWN")]
    ClientDown,
    #[serde(rename = "SECTOR DOWN")]
    SectorDown,
    #[serde(rename = "POP ISSUE")]
    PopIssue,
}

impl std::fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalStatus::LinkUp => write!(f, "LINK UP"),
            FinalStatus::Unstable => write!(f, "UNSTABLE"),
            FinalStatus::ClientDown => write!(f, "CLIENT DOWN"),
            FinalStatus::SectorDown => write!(f, "SECTOR DOWN"),
            FinalStatus::PopIssue => write!(f, "POP ISSUE"),
        }
    }
}

/// The three hop reports keyed by role, duplicated from `steps` so the
/// dashboard can address them without scanning the list.
#[derive(Debug, Clone, Serialize)]
pub struct TopologySummary {
    pub client: HopReport,
    pub base: HopReport,
    pub gw: HopReport,
}

/// Complete result of one diagnosis run.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisVerdict {
    pub final_status: FinalStatus,
    pub cause: String,
    /// Always exactly 3 entries in canonical hop order
    /// [Client Radio, Base Radio, Gateway (GW)].
    pub steps: Vec<HopReport>,
    pub topology: TopologySummary,
}

// ── Inventory ───────────────────────────────────────────────────────

/// One inventory row. The schema is owned by whoever populates the store
/// (spreadsheets in practice), so records stay opaque key-value maps; the
/// engine only reads the two addressing columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryRecord(pub serde_json::Map<String, serde_json::Value>);

impl InventoryRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    pub fn client_ip(&self) -> Option<&str> {
        self.field("Client_IP")
    }

    pub fn base_ip(&self) -> Option<&str> {
        self.field("Base_IP")
    }
}

// ── Bulk sweep ──────────────────────────────────────────────────────

/// Per-address result of a bulk reachability sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub alive: bool,
    pub loss_pct: u8,
    /// Average round-trip time, when the target answered.
    pub latency_ms: Option<f64>,
}
