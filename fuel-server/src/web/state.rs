//! Application state for the web layer.

use crate::registry::Registry;

/// Shared application state.
///
/// The registry handle is already shared and synchronised internally, so the
/// state is cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Station registry
    pub registry: Registry,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}
