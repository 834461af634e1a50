//! DUB manifest parsing for dubcheck
//!
//! Reads `dub.json` and `dub.sdl` package manifests into a normalized
//! model, and locates the nearest manifest from a starting directory.

pub mod error;
pub mod json;
pub mod locate;
pub mod manifest;
pub mod sdl;
pub mod value;

pub use error::{Error, Result};
pub use locate::{DUB_JSON, DUB_SDL, locate_project, manifest_path};
pub use manifest::{Configuration, Dependency, Manifest};
pub use value::Value;
