//! Run the constructed UAT command line and surface the child's exit code.

use std::process::Command;

use tracing::info;

use crate::lib::errors::LaunchError;

/// Run the command line through the platform shell, wait for completion, and
/// return the child's exit code.
///
/// The child inherits this process's console, so UAT output streams through
/// untouched. There is no timeout and nothing is captured.
pub fn run_command_line(command_line: &str) -> Result<i32, LaunchError> {
    let mut command = shell_command(command_line);
    info!(target: "uatx::uat", command = command_line, "Launching UAT");

    let status = command.status().map_err(|source| LaunchError {
        command: command_line.to_string(),
        source,
    })?;

    // A child killed without reporting a code (signal) counts as plain failure.
    Ok(status.code().unwrap_or(1))
}

/// `cmd.exe /C` strips one pair of outer quotes, so the whole line is
/// double-wrapped; without it a quoted script path followed by quoted
/// arguments is mis-split. `raw_arg` keeps cmd from re-quoting anything.
#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new("cmd.exe");
    command.raw_arg(format!("/C \"{command_line}\""));
    command
}

/// `sh -c` takes the line as one argument; no extra wrapping.
#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}
