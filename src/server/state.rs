//! Server state and configuration.

use std::sync::Arc;

use crate::store::FormStore;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    /// The persistence backend. Handlers only see the trait.
    pub store: Arc<dyn FormStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FormStore>) -> Self {
        Self { store }
    }
}
