//! Network tool ports.
//!
//! The engine never spawns processes directly; it talks to two narrow
//! capability traits. The real backends shell out to `fping` and `snmpget`,
//! the scripted doubles in [`crate::testtools`] return canned output.
//!
//! The trait methods return `impl Future + Send` rather than plain
//! `async fn` so callers can stay generic inside `Send` futures (axum
//! handlers, spawned tasks).

use std::future::Future;
use std::io;

use tokio::process::Command;

use linkscope_common::config::DiagConfig;

/// Raw result of one reachability check round.
#[derive(Debug, Clone)]
pub struct PingOutcome {
    /// Overall success — at least one probe packet came back.
    pub success: bool,
    /// Combined diagnostic output, used for loss/latency extraction.
    pub diagnostics: String,
}

/// Reachability check capability: one full probe round against an address.
///
/// `Err` means the tool could not be invoked at all (binary missing, spawn
/// failure) — a reported-down target is `Ok` with `success: false`.
pub trait PingTool: Send + Sync {
    fn ping(&self, target: &str) -> impl Future<Output = io::Result<PingOutcome>> + Send;
}

/// Telemetry GET capability: fetch one OID value from an address.
///
/// Returns `None` on any failure (timeout, non-zero exit, empty output);
/// never errors.
pub trait SnmpTool: Send + Sync {
    fn get(&self, target: &str, oid: &str) -> impl Future<Output = Option<String>> + Send;
}

// ── fping backend ───────────────────────────────────────────────────

/// Shells out to `fping -c N -t T -p I -q <addr>`.
#[derive(Debug, Clone)]
pub struct FpingTool {
    count: u32,
    timeout_ms: u64,
    interval_ms: u64,
}

impl FpingTool {
    pub fn new(cfg: &DiagConfig) -> Self {
        Self {
            count: cfg.ping_count,
            timeout_ms: cfg.ping_timeout_ms,
            interval_ms: cfg.ping_interval_ms,
        }
    }
}

impl PingTool for FpingTool {
    async fn ping(&self, target: &str) -> io::Result<PingOutcome> {
        let output = Command::new("fping")
            .args([
                "-c",
                &self.count.to_string(),
                "-t",
                &self.timeout_ms.to_string(),
                "-p",
                &self.interval_ms.to_string(),
                "-q",
                target,
            ])
            .output()
            .await?;

        // fping writes the per-target summary line to stderr.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diagnostics = if stdout.trim().is_empty() {
            stderr.into_owned()
        } else {
            format!("{stderr}\n{stdout}")
        };

        Ok(PingOutcome {
            success: output.status.success(),
            diagnostics,
        })
    }
}

// ── net-snmp backend ────────────────────────────────────────────────

/// Shells out to `snmpget -v 2c -c <community> -O qv <addr> <oid>`.
#[derive(Debug, Clone)]
pub struct NetSnmpTool {
    community: String,
}

impl NetSnmpTool {
    pub fn new(cfg: &DiagConfig) -> Self {
        Self {
            community: cfg.snmp_community.clone(),
        }
    }
}

impl SnmpTool for NetSnmpTool {
    async fn get(&self, target: &str, oid: &str) -> Option<String> {
        let output = Command::new("snmpget")
            .args(["-v", "2c", "-c", &self.community, "-O", "qv", target, oid])
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout)
            .trim()
            .replace('"', "");
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
