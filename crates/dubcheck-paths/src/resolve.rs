//! Package directory resolution
//!
//! DUB caches each fetched package under a directory named after the
//! package and its version: `cerealed-master`, `vibe-d-0.7.30`. Only two
//! constraint shapes map onto that convention; anything else (path or
//! branch constraints other than `~master`) has no derivable directory.

use std::path::PathBuf;

use dubcheck_manifest::Dependency;

/// The DUB package cache root.
///
/// `%APPDATA%\dub\packages` on Windows, `~/.dub/packages` elsewhere.
pub fn packages_root() -> PathBuf {
    #[cfg(windows)]
    {
        // dirs::config_dir resolves to %APPDATA% on Windows.
        dirs::config_dir()
            .unwrap_or_default()
            .join("dub")
            .join("packages")
    }
    #[cfg(not(windows))]
    {
        dirs::home_dir()
            .unwrap_or_default()
            .join(".dub")
            .join("packages")
    }
}

/// The directory-name suffix for a version constraint, or `None` when the
/// constraint does not map onto the cache naming convention.
///
/// `~master` → `-master`; constraints with `=` as their second byte
/// (`>=1.2.3`, `==1.2.3`) → `-1.2.3`.
pub fn version_suffix(constraint: &str) -> Option<String> {
    if constraint == "~master" {
        return Some("-master".to_string());
    }
    if constraint.as_bytes().get(1) == Some(&b'=') {
        return Some(format!("-{}", &constraint[2..]));
    }
    None
}

/// The expected cache directory for a dependency, or `None` when its
/// constraint is unresolvable.
pub fn package_dir(dependency: &Dependency) -> Option<PathBuf> {
    let suffix = version_suffix(&dependency.constraint)?;
    Some(packages_root().join(format!("{}{}", dependency.name, suffix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("~master", Some("-master"))]
    #[case(">=1.2.3", Some("-1.2.3"))]
    #[case("==0.5.7", Some("-0.5.7"))]
    #[case(">=0.5.7-beta", Some("-0.5.7-beta"))]
    #[case("~>1.0.0", None)]
    #[case("~develop", None)]
    #[case("1.2.3", None)]
    #[case("*", None)]
    #[case("", None)]
    fn version_suffix_cases(#[case] constraint: &str, #[case] expected: Option<&str>) {
        assert_eq!(version_suffix(constraint).as_deref(), expected);
    }

    #[test]
    fn package_dir_joins_root_name_and_suffix() {
        let dep = Dependency::new("cerealed", "~master");
        assert_eq!(
            package_dir(&dep),
            Some(packages_root().join("cerealed-master"))
        );
    }

    #[test]
    fn package_dir_is_absent_for_unresolvable_constraint() {
        let dep = Dependency::new("local", "~>1.0.0");
        assert_eq!(package_dir(&dep), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn packages_root_is_under_home() {
        assert!(packages_root().ends_with(".dub/packages"));
    }
}
