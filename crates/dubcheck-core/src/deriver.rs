//! The derivation pipeline
//!
//! locate manifest → parse → resolve package directories → assemble flags.
//! A missing manifest is the one silently absorbed condition: the deriver
//! returns `Ok(None)` and the caller keeps whatever it had. Parse errors
//! always propagate.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use dubcheck_manifest::{Configuration, Manifest, locate_project, manifest_path};
use dubcheck_paths::dependency_dirs;

use crate::{CheckConfig, Result, Settings};

/// Flags every check gets, before any manifest-derived ones.
const BASE_FLAGS: [&str; 2] = ["-w", "-unittest"];

/// Derives [`CheckConfig`]s, reusing the previous result while the
/// manifest is unchanged (unless disabled in [`Settings`]).
#[derive(Debug, Default)]
pub struct Deriver {
    settings: Settings,
    cache: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    manifest: PathBuf,
    mtime: SystemTime,
    config: CheckConfig,
}

impl Deriver {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: None,
        }
    }

    /// Derive the check configuration for the project containing
    /// `start_dir`.
    ///
    /// Returns `Ok(None)` when no manifest exists in `start_dir` or any
    /// ancestor. A malformed manifest is an error.
    pub fn derive(&mut self, start_dir: &Path) -> Result<Option<CheckConfig>> {
        let Some(base) = locate_project(start_dir) else {
            tracing::debug!(?start_dir, "no dub manifest in ancestor chain; skipping");
            return Ok(None);
        };
        let manifest = manifest_path(&base);
        let mtime = fs::metadata(&manifest).and_then(|m| m.modified()).ok();

        if self.settings.reuse_results
            && let Some(entry) = &self.cache
            && entry.manifest == manifest
            && mtime.is_some_and(|t| t == entry.mtime)
        {
            tracing::debug!(path = ?manifest, "manifest unchanged; reusing previous result");
            return Ok(Some(entry.config.clone()));
        }

        let config = derive_config(&manifest, &base, &self.settings)?;
        if let Some(mtime) = mtime {
            self.cache = Some(CacheEntry {
                manifest,
                mtime,
                config: config.clone(),
            });
        }
        Ok(Some(config))
    }
}

/// One-shot derivation without result reuse across calls.
pub fn derive_once(start_dir: &Path, settings: &Settings) -> Result<Option<CheckConfig>> {
    Deriver::new(settings.clone()).derive(start_dir)
}

fn derive_config(manifest_path: &Path, base: &Path, settings: &Settings) -> Result<CheckConfig> {
    let manifest = Manifest::load(manifest_path)?;
    let include_paths = dependency_dirs(&manifest.dependencies);
    let flags = build_flags(&manifest, settings, base);
    tracing::debug!(
        paths = include_paths.len(),
        flags = flags.len(),
        "derived check configuration"
    );
    Ok(CheckConfig {
        include_paths,
        flags,
    })
}

/// Pick the active configuration block: the explicitly named one if set,
/// else the first declared block. `None` means root-level fields apply.
fn selected_configuration<'a>(
    manifest: &'a Manifest,
    settings: &Settings,
) -> Option<&'a Configuration> {
    match &settings.configuration {
        Some(name) => manifest.configurations.iter().find(|c| &c.name == name),
        None => manifest.configurations.first(),
    }
}

fn build_flags(manifest: &Manifest, settings: &Settings, base: &Path) -> Vec<String> {
    let selected = selected_configuration(manifest, settings);

    let mut flags: Vec<String> = BASE_FLAGS.iter().map(|f| f.to_string()).collect();

    // Root-level string import paths apply regardless of the selected
    // block; block-level ones follow, all resolved against the project dir.
    let config_paths = selected.map(|c| c.string_import_paths.as_slice()).unwrap_or(&[]);
    for path in manifest.string_import_paths.iter().chain(config_paths) {
        flags.push(format!("-J{}", base.join(path).display()));
    }

    let (dflags, versions) = match selected {
        Some(config) => (&config.dflags, &config.versions),
        None => (&manifest.dflags, &manifest.versions),
    };
    flags.extend(dflags.iter().cloned());
    flags.extend(versions.iter().map(|v| format!("-version={v}")));

    flags
}
