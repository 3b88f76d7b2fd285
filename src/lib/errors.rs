use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Error;
use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::engine::install::EngineInstall;

use super::listing;

/// Exit code produced by `clap` when the invocation is missing arguments.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when the launcher manifest cannot be located or opened.
pub const EXIT_MANIFEST_NOT_FOUND: u8 = 3;
/// Exit code when the launcher manifest exists but is not valid JSON.
pub const EXIT_MANIFEST_MALFORMED: u8 = 4;
/// Exit code when the requested engine name matches no known install.
pub const EXIT_UNKNOWN_ENGINE: u8 = 5;
/// Exit code when the UAT subprocess could not be spawned at all.
pub const EXIT_LAUNCH_FAILED: u8 = 6;

/// Errors that can occur while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while enumerating engine installs.
///
/// The attempted manifest path is part of the message so the user can check
/// the file by hand when discovery fails.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Unable to resolve the per-user launcher data directory on this platform")]
    DataDirUnavailable,
    #[error("Unable to open launcher manifest {path}: {source}")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to parse launcher manifest {path}: {source}")]
    ManifestMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DiscoveryError {
    /// Process exit code for this failure. A missing data directory means the
    /// manifest cannot be found either, so both map to the same code.
    pub fn exit_code(&self) -> u8 {
        match self {
            DiscoveryError::DataDirUnavailable | DiscoveryError::ManifestNotFound { .. } => {
                EXIT_MANIFEST_NOT_FOUND
            }
            DiscoveryError::ManifestMalformed { .. } => EXIT_MANIFEST_MALFORMED,
        }
    }
}

/// The requested name matched no install; carries the full merged list so the
/// caller can show the user what is available.
#[derive(Debug, Error)]
#[error("No engine install named `{requested}` was found")]
pub struct UnknownEngine {
    pub requested: String,
    pub available: Vec<EngineInstall>,
}

impl UnknownEngine {
    pub fn exit_code(&self) -> u8 {
        EXIT_UNKNOWN_ENGINE
    }
}

/// The UAT subprocess could not be spawned. Distinct from a child that ran
/// and failed, whose own exit code is propagated instead.
#[derive(Debug, Error)]
#[error("Failed to launch `{command}`: {source}")]
pub struct LaunchError {
    pub command: String,
    #[source]
    pub source: io::Error,
}

impl LaunchError {
    pub fn exit_code(&self) -> u8 {
        EXIT_LAUNCH_FAILED
    }
}

/// Bundles a terminal error message with the process exit code.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: ExitCode,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DiscoveryError> for RunExit {
    fn from(err: DiscoveryError) -> Self {
        Self {
            exit_code: ExitCode::from(err.exit_code()),
            message: err.to_string(),
        }
    }
}

impl From<UnknownEngine> for RunExit {
    fn from(err: UnknownEngine) -> Self {
        let mut message = format!(
            "No engine install named `{}` was found. Available installs:\n",
            err.requested
        );
        message.push_str(&listing::render_install_listing(&err.available));
        Self {
            exit_code: ExitCode::from(err.exit_code()),
            message,
        }
    }
}

impl From<LaunchError> for RunExit {
    fn from(err: LaunchError) -> Self {
        Self {
            exit_code: ExitCode::from(err.exit_code()),
            message: err.to_string(),
        }
    }
}
