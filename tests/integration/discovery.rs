use std::fs;

use uatx::engine::install::InstallSource;
use uatx::engine::launcher::LauncherManifestSource;
use uatx::lib::errors::{DiscoveryError, EXIT_MANIFEST_MALFORMED, EXIT_MANIFEST_NOT_FOUND};

use crate::common::fixture;

#[test]
fn valid_manifest_yields_only_prefixed_entries_with_stripped_names() {
    let source = LauncherManifestSource::with_path(fixture("launcher_installed_valid.json"));
    let installs = source.installs().expect("fixture manifest should load");

    assert_eq!(installs.len(), 1);
    assert_eq!(installs[0].name, "5.3");
    assert_eq!(installs[0].path.to_string_lossy(), "C:/Epic/UE_5.3");
}

#[test]
fn partial_entries_are_skipped_and_later_entries_survive() {
    let source = LauncherManifestSource::with_path(fixture("launcher_installed_partial.json"));
    let installs = source.installs().expect("fixture manifest should load");

    let names: Vec<&str> = installs.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["5.3", "4.27"]);
}

#[test]
fn missing_manifest_is_reported_as_not_found() {
    let dir = tempfile::tempdir().expect("can create temporary directory");
    let path = dir.path().join("LauncherInstalled.dat");

    let source = LauncherManifestSource::with_path(path.clone());
    let error = source.installs().expect_err("missing file must not parse");

    match error {
        DiscoveryError::ManifestNotFound { path: reported, .. } => {
            assert_eq!(reported, path, "diagnostic must carry the attempted path");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(error_exit_code(&source), EXIT_MANIFEST_NOT_FOUND);
}

#[test]
fn malformed_manifest_is_distinct_from_missing() {
    let dir = tempfile::tempdir().expect("can create temporary directory");
    let path = dir.path().join("LauncherInstalled.dat");
    fs::write(&path, "{ this is not json").expect("can write fixture");

    let source = LauncherManifestSource::with_path(path.clone());
    let error = source.installs().expect_err("garbage must not parse");

    match &error {
        DiscoveryError::ManifestMalformed { path: reported, .. } => {
            assert_eq!(reported, &path);
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(error.exit_code(), EXIT_MANIFEST_MALFORMED);
    assert_ne!(EXIT_MANIFEST_MALFORMED, EXIT_MANIFEST_NOT_FOUND);
}

#[test]
fn discovery_is_idempotent_over_an_unchanged_manifest() {
    let source = LauncherManifestSource::with_path(fixture("launcher_installed_valid.json"));

    let first = source.installs().expect("first scan");
    let second = source.installs().expect("second scan");
    assert_eq!(first, second);
}

fn error_exit_code(source: &LauncherManifestSource) -> u8 {
    source
        .installs()
        .expect_err("source under test must fail")
        .exit_code()
}
