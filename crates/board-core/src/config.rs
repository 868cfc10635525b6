//! Board Configuration
//!
//! Default labels and the pointer activation distance, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::domain::BoardResult;

/// Pointer distance (px) a pressed entity must travel before a drag starts
pub const DEFAULT_ACTIVATION_DISTANCE_PX: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// New columns are titled "{prefix} {n}"
    pub column_title_prefix: String,
    /// New items are labeled "{prefix} {n}"
    pub item_label_prefix: String,
    /// Consumed by the gesture layer, not by the engine
    pub activation_distance_px: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Column".to_string(),
            item_label_prefix: "Task".to_string(),
            activation_distance_px: DEFAULT_ACTIVATION_DISTANCE_PX,
        }
    }
}

impl BoardConfig {
    /// Parse a config, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn column_title(&self, ordinal: usize) -> String {
        format!("{} {}", self.column_title_prefix, ordinal)
    }

    pub fn item_label(&self, ordinal: usize) -> String {
        format!("{} {}", self.item_label_prefix, ordinal)
    }
}
