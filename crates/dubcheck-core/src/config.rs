//! Derived check configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the external syntax checker needs to compile a project file:
/// compiler include paths and extra flags.
///
/// Both lists are ordered; the integration layer passes them through
/// without reordering or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    pub include_paths: Vec<PathBuf>,
    pub flags: Vec<String>,
}
