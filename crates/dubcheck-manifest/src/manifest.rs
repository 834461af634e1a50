//! Normalized manifest model
//!
//! Both manifest formats reduce to this model; downstream code never sees
//! format-specific trees.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DUB_SDL, Error, Result, Value, json, sdl};

/// A declared dependency: package name plus its version constraint,
/// e.g. `("cerealed", "~master")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub constraint: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }
}

/// A named configuration block overriding root-level build settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    #[serde(default)]
    pub string_import_paths: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub dflags: Vec<String>,
}

/// A parsed DUB package manifest.
///
/// Dependency order matches declaration order in the manifest; it carries
/// through to the compiler's include-path search order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub name: Option<String>,
    pub target_type: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub string_import_paths: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub dflags: Vec<String>,
    #[serde(default)]
    pub configurations: Vec<Configuration>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// Format is selected by file name: `dub.sdl` parses as SDL, anything
    /// else as JSON. Parse failures propagate to the caller.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let is_sdl = path.file_name().is_some_and(|n| n == DUB_SDL);
        tracing::debug!(?path, format = if is_sdl { "SDL" } else { "JSON" }, "loading manifest");
        let value = if is_sdl {
            sdl::parse(&content)?
        } else {
            json::parse(&content)?
        };
        Self::from_value(&value)
    }

    /// Parse a JSON manifest from a string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(&json::parse(content)?)
    }

    /// Parse an SDL manifest from a string.
    pub fn from_sdl_str(content: &str) -> Result<Self> {
        Self::from_value(&sdl::parse(content)?)
    }

    /// Extract the normalized model from a parsed value tree.
    pub fn from_value(value: &Value) -> Result<Self> {
        value.expect_object("manifest root")?;

        let mut manifest = Manifest {
            name: optional_str(value, "name")?,
            target_type: optional_str(value, "targetType")?,
            string_import_paths: string_list(value, "stringImportPaths")?,
            versions: string_list(value, "versions")?,
            dflags: string_list(value, "dflags")?,
            ..Manifest::default()
        };

        if let Some(deps) = value.get("dependencies") {
            for (name, constraint) in deps.expect_object("dependencies")? {
                manifest
                    .dependencies
                    .push(Dependency::new(name.as_str(), constraint_str(name, constraint)?));
            }
        }

        if let Some(configs) = value.get("configurations") {
            for config in configs.expect_array("configurations")? {
                manifest.configurations.push(Configuration {
                    name: config
                        .get("name")
                        .ok_or_else(|| Error::shape("string", "missing", "configuration name"))?
                        .expect_str("configuration name")?
                        .to_string(),
                    string_import_paths: string_list(config, "stringImportPaths")?,
                    versions: string_list(config, "versions")?,
                    dflags: string_list(config, "dflags")?,
                });
            }
        }

        Ok(manifest)
    }
}

fn optional_str(value: &Value, key: &str) -> Result<Option<String>> {
    value
        .get(key)
        .map(|v| v.expect_str(key).map(str::to_string))
        .transpose()
}

fn string_list(value: &Value, key: &str) -> Result<Vec<String>> {
    match value.get(key) {
        None => Ok(Vec::new()),
        Some(list) => list
            .expect_array(key)?
            .iter()
            .map(|item| item.expect_str(key).map(str::to_string))
            .collect(),
    }
}

/// A dependency constraint is normally a plain string; the JSON form also
/// allows an object such as `{"version": "~>1.0", "optional": true}`.
/// Object forms without a version have no resolvable constraint; the empty
/// string is dropped during directory resolution.
fn constraint_str(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.clone()),
        Value::Object(_) => match value.get("version") {
            Some(version) => Ok(version.expect_str(name)?.to_string()),
            None => Ok(String::new()),
        },
        other => Err(Error::shape("string or object", other.kind(), name)),
    }
}
