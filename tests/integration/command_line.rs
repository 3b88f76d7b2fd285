use std::path::Path;

use uatx::engine::install::{discover_installs, resolve, InstallSource};
use uatx::engine::launcher::LauncherManifestSource;
use uatx::lib::cmdline::{build_command_line, UAT_SCRIPT_WINDOWS};

use crate::common::fixture;

#[test]
fn resolved_install_produces_the_expected_uat_command_line() {
    let manifest = LauncherManifestSource::with_path(fixture("launcher_installed_valid.json"));
    let sources: [&dyn InstallSource; 1] = [&manifest];
    let installs = discover_installs(&sources).expect("manifest loads");

    let resolved = resolve(&installs, "5.3").expect("5.3 is installed");
    assert_eq!(resolved.path.to_string_lossy(), "C:/Epic/UE_5.3");

    let script = Path::new(UAT_SCRIPT_WINDOWS);
    let line = build_command_line(
        &resolved.path,
        script,
        &["BuildCookRun".to_string(), "-project=Foo".to_string()],
    );

    let expected_entry = resolved.path.join(script);
    assert_eq!(
        line,
        format!("\"{}\" BuildCookRun -project=Foo", expected_entry.display())
    );
}

#[test]
fn argument_tail_order_and_content_are_preserved() {
    let line = build_command_line(
        Path::new("/opt/UE_5.3"),
        Path::new("Engine/Build/BatchFiles/RunUAT.sh"),
        &[
            "BuildCookRun".to_string(),
            "-project=/work/My Game/Game.uproject".to_string(),
            "-clientconfig=Shipping".to_string(),
        ],
    );

    let tail = line
        .split_once(".sh\" ")
        .map(|(_, tail)| tail)
        .expect("script path terminates before the tail");
    assert_eq!(
        tail,
        "BuildCookRun \"-project=/work/My Game/Game.uproject\" -clientconfig=Shipping"
    );
}
