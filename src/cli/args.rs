//! CLI argument definitions.

use clap::Parser;

/// Command-line arguments.
///
/// Everything after the engine name belongs to UAT; hyphenated tokens like
/// `-project=Foo` must survive parsing untouched.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Resolve an installed Unreal Engine version and run UAT against it",
    long_about = None
)]
pub struct UatArgs {
    /// Engine to use: a launcher version such as `5.3`, or `source-0` for the
    /// first registered source build.
    pub engine: String,

    /// UAT command and arguments, forwarded verbatim to RunUAT.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}
