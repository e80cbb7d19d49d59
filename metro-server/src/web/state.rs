//! Application state for the web layer.

use std::sync::Arc;

use crate::network::TransitNetwork;

/// Shared application state.
///
/// The network is built once at startup and never mutated, so sharing it
/// across request handlers is a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The immutable transit network.
    pub network: Arc<TransitNetwork>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: TransitNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
