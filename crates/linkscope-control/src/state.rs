//! Shared application state.

use std::sync::Arc;

use linkscope_diag::LinkDiagnostics;

use crate::store::InventoryStore;

/// State shared across all request handlers. Generic over the ping/SNMP
/// tool ports so integration tests can inject scripted tools; production
/// wires in the fping and net-snmp backends.
pub struct AppState<P, S> {
    pub store: Arc<dyn InventoryStore>,
    pub diag: LinkDiagnostics<P, S>,
}

impl<P, S> AppState<P, S> {
    pub fn new(store: Arc<dyn InventoryStore>, diag: LinkDiagnostics<P, S>) -> Self {
        Self { store, diag }
    }
}

impl<P: Clone, S: Clone> Clone for AppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            diag: self.diag.clone(),
        }
    }
}
