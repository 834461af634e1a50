//! Include-path expansion
//!
//! By convention a DUB package keeps importable modules either at its root
//! or under `source/`; both variants go on the include path. Order matters
//! for compiler search precedence, so package roots come first, followed
//! by every `source/` variant in the same relative order.

use std::path::PathBuf;

use dubcheck_manifest::Dependency;

use crate::resolve::package_dir;

/// Append the `source/` variant of every directory, keeping order:
/// `[a, b]` becomes `[a, b, a/source, b/source]`.
pub fn expand(dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    let sources: Vec<PathBuf> = dirs.iter().map(|d| d.join("source")).collect();
    let mut expanded = dirs;
    expanded.extend(sources);
    expanded
}

/// Resolve every dependency to its package directory and expand with the
/// `source/` variants. Dependencies with unresolvable constraints are
/// omitted.
pub fn dependency_dirs(dependencies: &[Dependency]) -> Vec<PathBuf> {
    let resolved = dependencies
        .iter()
        .filter_map(|dep| {
            let dir = package_dir(dep);
            if dir.is_none() {
                tracing::debug!(
                    name = %dep.name,
                    constraint = %dep.constraint,
                    "constraint has no cache directory; dropping dependency"
                );
            }
            dir
        })
        .collect();
    expand(resolved)
}
