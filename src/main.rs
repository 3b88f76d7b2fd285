//! Entry point for uatx.
use std::process::ExitCode;

use clap::Parser;
use uatx::{
    cli::UatArgs,
    config::ToolConfig,
    engine::{
        install::{self, InstallSource},
        launcher::LauncherManifestSource,
        source_builds::SourceBuildsSource,
    },
    lib::{
        cmdline,
        errors::{RunExit, UnknownEngine},
        telemetry,
    },
    uat,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = UatArgs::parse();
    let config = ToolConfig::load_default().map_err(RunExit::from_error)?;

    let manifest_source = match config.manifest_path.clone() {
        Some(path) => LauncherManifestSource::with_path(path),
        None => LauncherManifestSource::locate(),
    };
    let source_builds = SourceBuildsSource;
    let sources: [&dyn InstallSource; 2] = [&manifest_source, &source_builds];
    let installs = install::discover_installs(&sources)?;

    let Some(resolved) = install::resolve(&installs, &args.engine) else {
        return Err(RunExit::from(UnknownEngine {
            requested: args.engine,
            available: installs,
        }));
    };
    tracing::info!(
        target: "uatx::engine",
        name = %resolved.name,
        path = %resolved.path.display(),
        "Resolved engine install"
    );

    let script = config
        .uat_script
        .clone()
        .unwrap_or_else(|| cmdline::default_uat_script().to_path_buf());
    let command_line = cmdline::build_command_line(&resolved.path, &script, &args.command);

    let child_code = uat::run_command_line(&command_line)?;
    Ok(exit_code_from_child(child_code))
}

/// Child exit codes outside the `u8` range collapse to plain failure.
fn exit_code_from_child(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
