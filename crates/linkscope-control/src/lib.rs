//! Linkscope control plane library.
//!
//! Re-exports the API router, shared state, and the inventory store so
//! they can be used by integration tests (and potentially embedded in
//! other binaries).

pub mod api;
pub mod state;
pub mod store;
