//! DUB package directory resolution for dubcheck
//!
//! Maps declared dependencies onto the package cache layout
//! (`~/.dub/packages/<name><suffix>`) and expands each package directory
//! with its conventional `source/` subdirectory.

pub mod expand;
pub mod resolve;

pub use expand::{dependency_dirs, expand};
pub use resolve::{package_dir, packages_root, version_suffix};
