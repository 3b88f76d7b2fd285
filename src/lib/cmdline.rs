//! Shared helpers for building RunUAT command lines.

use std::path::Path;

/// UAT entry point under a Windows engine install.
pub const UAT_SCRIPT_WINDOWS: &str = "Engine/Build/BatchFiles/RunUAT.bat";
/// UAT entry point under a Linux/macOS engine install.
pub const UAT_SCRIPT_UNIX: &str = "Engine/Build/BatchFiles/RunUAT.sh";

/// UAT entry point for the platform this binary was built for.
pub fn default_uat_script() -> &'static Path {
    if cfg!(windows) {
        Path::new(UAT_SCRIPT_WINDOWS)
    } else {
        Path::new(UAT_SCRIPT_UNIX)
    }
}

/// Quote a single argument token.
///
/// Tokens are re-quoted deterministically from the parsed argument list, not
/// reconstructed from the raw invocation text: bare tokens pass through
/// unchanged, anything containing whitespace or a quote is wrapped in double
/// quotes with embedded quotes backslash-escaped. Shell operators are not
/// escaped; arguments pass through to UAT as-is.
pub fn quote_token(token: &str) -> String {
    let needs_quotes =
        token.is_empty() || token.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return token.to_string();
    }
    format!("\"{}\"", token.replace('"', "\\\""))
}

/// Build the full UAT command line for an install.
///
/// The script path is always quoted to tolerate install directories with
/// embedded whitespace; the argument tail follows, one space per token.
pub fn build_command_line(install_dir: &Path, script: &Path, args: &[String]) -> String {
    let entry_point = install_dir.join(script);
    let mut line = format!("\"{}\"", entry_point.display());
    for arg in args {
        line.push(' ');
        line.push_str(&quote_token(arg));
    }
    line
}
