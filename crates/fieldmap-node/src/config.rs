//! Node configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Topic the field map travels on.
pub const DEFAULT_TOPIC: &str = "field_map";

/// Per-subscriber queue capacity.
pub const DEFAULT_QUEUE_DEPTH: usize = 10;

/// Settings shared by the creator and solver nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub topic: String,
    pub queue_depth: usize,
    /// Print prompts while reading parameters from stdin.
    pub prompt: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            queue_depth: DEFAULT_QUEUE_DEPTH,
            prompt: true,
        }
    }
}

impl NodeConfig {
    /// Load a configuration from a JSON file. Missing keys take their
    /// default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
