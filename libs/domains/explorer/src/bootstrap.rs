use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::models::ViewerConfig;

/// Builds the viewer configuration exactly once.
///
/// Two states: not started, then started with the shared record. `start`
/// moves to the started state on its first call; later calls return the
/// same record without building another.
#[derive(Debug, Default)]
pub struct Bootstrapper {
    config: OnceLock<Arc<ViewerConfig>>,
}

impl Bootstrapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.config.get().is_some()
    }

    /// Returns the record, building it on first use.
    pub fn start(&self) -> Arc<ViewerConfig> {
        let config = self.config.get_or_init(|| {
            let config = ViewerConfig::explorer();
            info!(
                url = config.url(),
                dom_id = config.dom_id(),
                "Viewer configuration built"
            );
            Arc::new(config)
        });
        Arc::clone(config)
    }
}
