use std::process::Command;

use uatx::lib::errors::EXIT_USAGE;

use crate::common::BINARY_PATH;

#[test]
fn no_arguments_is_a_usage_error() {
    let output = Command::new(BINARY_PATH).output().expect("binary runs");

    assert_eq!(output.status.code(), Some(i32::from(EXIT_USAGE)));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn engine_name_without_a_uat_command_is_a_usage_error() {
    let output = Command::new(BINARY_PATH)
        .arg("5.3")
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(i32::from(EXIT_USAGE)));
}

// Off Windows there is no program-data directory and no registry, so a plain
// invocation deterministically fails discovery with the not-found exit code.
#[cfg(not(windows))]
#[test]
fn unresolvable_data_dir_reports_manifest_not_found() {
    use uatx::lib::errors::EXIT_MANIFEST_NOT_FOUND;

    let output = Command::new(BINARY_PATH)
        .args(["5.3", "BuildCookRun"])
        .env_remove("HOME")
        .env_remove("XDG_CONFIG_HOME")
        .output()
        .expect("binary runs");

    assert_eq!(
        output.status.code(),
        Some(i32::from(EXIT_MANIFEST_NOT_FOUND))
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("launcher data directory"),
        "stderr was: {stderr}"
    );
}
