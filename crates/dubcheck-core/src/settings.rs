//! Deriver settings supplied by the hosting integration

use serde::{Deserialize, Serialize};

/// External knobs for the deriver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Manifest configuration block to use. When unset, the first declared
    /// block is used, falling back to root-level fields.
    #[serde(default)]
    pub configuration: Option<String>,

    /// Reuse the previous result while the manifest file is unchanged.
    /// When disabled, every call recomputes from scratch.
    #[serde(default = "default_reuse")]
    pub reuse_results: bool,
}

fn default_reuse() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            configuration: None,
            reuse_results: default_reuse(),
        }
    }
}

impl Settings {
    /// Settings selecting a named configuration block.
    pub fn with_configuration(name: impl Into<String>) -> Self {
        Self {
            configuration: Some(name.into()),
            ..Self::default()
        }
    }
}
