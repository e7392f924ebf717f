//! Display metadata — the name/description/icon/category the host renders
//! next to the trigger in its sequence editor.

use serde::{Deserialize, Serialize};

/// Host-rendered descriptive fields of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMetadata {
    pub name: String,
    pub description: String,
    /// Icon key the host resolves to an actual asset.
    pub icon: String,
    pub category: String,
}

impl Default for TriggerMetadata {
    fn default() -> Self {
        Self {
            name: "Humidity Threshold Trigger".to_string(),
            description: "Toggles a switch device when the ambient humidity rises above a threshold"
                .to_string(),
            icon: "CloudSVG".to_string(),
            category: "Switch".to_string(),
        }
    }
}
