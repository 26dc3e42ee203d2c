//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Publish a `completeness.grouped.v1` event after each grouping
    #[serde(default = "default_publish_grouping_events")]
    pub publish_grouping_events: bool,
}

fn default_publish_grouping_events() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            publish_grouping_events: default_publish_grouping_events(),
        }
    }
}
