use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the plugin-matcher service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// Whether the plugins service is enabled.
    pub enabled: bool,
    /// Opsgenie API key used by the alerting plugin.
    pub opsgenie_api_key: String,
    /// Labels used to match plugin resources.
    pub plugins: HashMap<String, String>,
}

impl PluginsConfig {
    /// Returns true when the config carries no plugin matchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
