//! Scripted tool doubles.
//!
//! Stand-ins for the fping/snmpget backends used by unit and integration
//! tests. Both emit output shaped like the real tools so the production
//! parsers are exercised, and both keep a call log so tests can assert
//! which addresses actually saw I/O (e.g. the SKIPPED fast path, or that
//! an offline radio is never queried over SNMP).

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::tools::{PingOutcome, PingTool, SnmpTool};

/// What a scripted address should report.
#[derive(Debug, Clone, Copy)]
pub enum PingScript {
    Up { loss_pct: u8 },
    Down,
    /// Simulate the tool binary being missing.
    Fail,
}

/// Scripted [`PingTool`]. Unscripted addresses report Down.
#[derive(Clone, Default)]
pub struct ScriptedPing {
    scripts: Arc<Mutex<HashMap<String, PingScript>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, address: &str, script: PingScript) {
        self.scripts.lock().unwrap().insert(address.to_string(), script);
    }

    pub fn up(&self, address: &str) {
        self.script(address, PingScript::Up { loss_pct: 0 });
    }

    pub fn down(&self, address: &str) {
        self.script(address, PingScript::Down);
    }

    pub fn fail(&self, address: &str) {
        self.script(address, PingScript::Fail);
    }

    /// Addresses probed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PingTool for ScriptedPing {
    async fn ping(&self, target: &str) -> io::Result<PingOutcome> {
        self.calls.lock().unwrap().push(target.to_string());
        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(target)
            .copied()
            .unwrap_or(PingScript::Down);
        match script {
            PingScript::Up { loss_pct } => Ok(PingOutcome {
                success: true,
                diagnostics: format!(
                    "{target} : xmt/rcv/%loss = 5/5/{loss_pct}%, min/avg/max = 0.84/1.23/2.05"
                ),
            }),
            PingScript::Down => Ok(PingOutcome {
                success: false,
                diagnostics: format!("{target} : xmt/rcv/%loss = 5/0/100%"),
            }),
            PingScript::Fail => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "fping: command not found",
            )),
        }
    }
}

/// A sequence of values for one (address, OID) pair. Reads walk the
/// sequence and then stick on the last value, so a 3-sample evaluation
/// can be scripted with exactly 3 entries (or 1 for a steady signal).
#[derive(Debug, Clone)]
struct Feed {
    values: Vec<String>,
    next: usize,
}

impl Feed {
    fn take(&mut self) -> Option<String> {
        if self.values.is_empty() {
            return None;
        }
        let idx = self.next.min(self.values.len() - 1);
        self.next += 1;
        Some(self.values[idx].clone())
    }
}

/// Scripted [`SnmpTool`]. Unscripted (address, OID) pairs read as failures.
#[derive(Clone, Default)]
pub struct ScriptedSnmp {
    feeds: Arc<Mutex<HashMap<(String, String), Feed>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedSnmp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read of this OID returns `value`.
    pub fn set(&self, address: &str, oid: &str, value: &str) {
        self.set_series(address, oid, &[value]);
    }

    /// Consecutive reads of this OID walk `values`, sticking on the last.
    pub fn set_series(&self, address: &str, oid: &str, values: &[&str]) {
        self.feeds.lock().unwrap().insert(
            (address.to_string(), oid.to_string()),
            Feed {
                values: values.iter().map(|v| v.to_string()).collect(),
                next: 0,
            },
        );
    }

    /// (address, OID) pairs read so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SnmpTool for ScriptedSnmp {
    async fn get(&self, target: &str, oid: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .push((target.to_string(), oid.to_string()));
        self.feeds
            .lock()
            .unwrap()
            .get_mut(&(target.to_string(), oid.to_string()))
            .and_then(Feed::take)
    }
}
