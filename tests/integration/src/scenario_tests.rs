//! End-to-end derivation scenarios
//!
//! Each test builds a project directory with a real manifest file and runs
//! the whole pipeline through the deriver.

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use dubcheck_core::{Deriver, Settings, derive_once};
use dubcheck_paths::packages_root;

fn project(manifest_name: &str, content: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join(manifest_name), content).expect("Failed to write manifest");
    temp
}

#[test]
fn cerealed_round_trip() {
    // A `~master` dependency resolves to the `-master` cache directory,
    // and the include paths are that directory plus its source/ variant.
    let temp = project(
        "dub.json",
        r#"{"name": "p", "dependencies": {"cerealed": "~master"}}"#,
    );

    let config = derive_once(temp.path(), &Settings::default())
        .unwrap()
        .expect("manifest should be found");

    let expected = packages_root().join("cerealed-master");
    assert_eq!(
        config.include_paths,
        vec![expected.clone(), expected.join("source")]
    );
}

#[test]
fn json_manifest_without_configurations() {
    let temp = project(
        "dub.json",
        r#"{
            "name": "myproject",
            "targetType": "executable",
            "stringImportPaths": ["stringies", "otherstringies"],
            "dependencies": {"cerealed": "~master"}
        }"#,
    );

    let config = derive_once(temp.path(), &Settings::default())
        .unwrap()
        .expect("manifest should be found");

    assert_eq!(config.include_paths.len(), 2);
    assert_eq!(
        config.flags,
        vec![
            "-w".to_string(),
            "-unittest".to_string(),
            format!("-J{}", temp.path().join("stringies").display()),
            format!("-J{}", temp.path().join("otherstringies").display()),
        ]
    );
}

const SDL_WITH_CONFIGURATIONS: &str = r#"
name "myproject"
targetType "executable"
configuration "default" {
    stringImportPaths "stringies" "otherstringies"
}
configuration "unittest" {
    versions "testVersion"
    dflags "-foo" "-bar"
}
"#;

#[test]
fn sdl_manifest_defaults_to_first_configuration() {
    let temp = project("dub.sdl", SDL_WITH_CONFIGURATIONS);

    let config = derive_once(temp.path(), &Settings::default())
        .unwrap()
        .expect("manifest should be found");

    assert_eq!(
        config.flags,
        vec![
            "-w".to_string(),
            "-unittest".to_string(),
            format!("-J{}", temp.path().join("stringies").display()),
            format!("-J{}", temp.path().join("otherstringies").display()),
        ]
    );
}

#[test]
fn sdl_manifest_with_explicit_unittest_configuration() {
    let temp = project("dub.sdl", SDL_WITH_CONFIGURATIONS);

    let settings = Settings {
        configuration: Some("unittest".to_string()),
        reuse_results: false,
    };
    let config = derive_once(temp.path(), &settings)
        .unwrap()
        .expect("manifest should be found");

    // The unittest block declares no string import paths, so no -J flags.
    assert_eq!(
        config.flags,
        vec!["-w", "-unittest", "-foo", "-bar", "-version=testVersion"]
    );
}

#[test]
fn missing_manifest_leaves_prior_result_untouched() {
    let with_manifest = project("dub.json", r#"{"name": "p"}"#);
    let without_manifest = TempDir::new().unwrap();

    let mut deriver = Deriver::new(Settings::default());
    let first = deriver
        .derive(with_manifest.path())
        .unwrap()
        .expect("manifest should be found");

    // No manifest anywhere up the chain: no error, no replacement result.
    assert_eq!(deriver.derive(without_manifest.path()).unwrap(), None);

    // The earlier project still derives to the same thing afterwards.
    let again = deriver.derive(with_manifest.path()).unwrap().unwrap();
    assert_eq!(first, again);
}

#[test]
fn nearest_manifest_in_ancestor_chain_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dub.json"), r#"{"name": "outer"}"#).unwrap();
    let inner = temp.path().join("inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(
        inner.join("dub.json"),
        r#"{"name": "inner", "stringImportPaths": ["views"]}"#,
    )
    .unwrap();

    let config = derive_once(&inner, &Settings::default()).unwrap().unwrap();
    assert_eq!(
        config.flags,
        vec![
            "-w".to_string(),
            "-unittest".to_string(),
            format!("-J{}", inner.join("views").display()),
        ]
    );
}
