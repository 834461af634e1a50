//! Project location
//!
//! Finds the nearest DUB project root by walking ancestor directories.

use std::path::{Path, PathBuf};

/// Primary manifest file name.
pub const DUB_JSON: &str = "dub.json";
/// Secondary manifest file name, checked only when no `dub.json` exists
/// anywhere in the ancestor chain.
pub const DUB_SDL: &str = "dub.sdl";

/// Find the directory of the nearest manifest, searching `start` and each
/// ancestor for `dub.json` first, then the same chain for `dub.sdl`.
pub fn locate_project(start: &Path) -> Option<PathBuf> {
    find_dominating(start, DUB_JSON).or_else(|| find_dominating(start, DUB_SDL))
}

fn find_dominating(start: &Path, file_name: &str) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        if d.join(file_name).is_file() {
            return Some(d.to_path_buf());
        }
        dir = d.parent();
    }
    None
}

/// The manifest path within a located project directory: `dub.json` if it
/// exists there, otherwise `dub.sdl` (whose existence is not re-checked).
pub fn manifest_path(base: &Path) -> PathBuf {
    let primary = base.join(DUB_JSON);
    if primary.is_file() {
        primary
    } else {
        base.join(DUB_SDL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_manifest_in_start_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DUB_JSON), "{}").unwrap();
        assert_eq!(locate_project(temp.path()), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn walks_up_to_an_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DUB_SDL), "").unwrap();
        let nested = temp.path().join("src/deep");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(locate_project(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn json_anywhere_in_chain_wins_over_nearer_sdl() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DUB_JSON), "{}").unwrap();
        let nested = temp.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(DUB_SDL), "").unwrap();

        // The full chain is searched for dub.json before dub.sdl is tried.
        assert_eq!(locate_project(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn absent_everywhere_returns_none() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        // The temp dir's own ancestors are system directories without manifests.
        assert_eq!(locate_project(&empty), None);
    }

    #[test]
    fn manifest_path_prefers_existing_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DUB_JSON), "{}").unwrap();
        assert_eq!(manifest_path(temp.path()), temp.path().join(DUB_JSON));
    }

    #[test]
    fn manifest_path_falls_back_to_sdl_without_checking_existence() {
        let temp = TempDir::new().unwrap();
        assert_eq!(manifest_path(temp.path()), temp.path().join(DUB_SDL));
    }
}
