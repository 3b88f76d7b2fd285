//! Load and validate the optional tool configuration.
//!
//! Configuration is a flat TOML file; everything in it is optional and a
//! missing file yields defaults.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, error};

use crate::lib::{errors::ConfigError, paths};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Validated tool configuration.
#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    /// Absolute override for the launcher manifest location.
    pub manifest_path: Option<PathBuf>,
    /// Relative override for the UAT entry point under the install directory.
    pub uat_script: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawToolConfig {
    manifest_path: Option<PathBuf>,
    uat_script: Option<PathBuf>,
}

impl ToolConfig {
    /// Load from the platform config directory, or defaults if absent.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from_path(path),
            _ => {
                debug!(target: "uatx::config", "No configuration file; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        debug!(
            target: "uatx::config",
            path = %path.display(),
            "Reading configuration file"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "uatx::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawToolConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "uatx::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawToolConfig, path: PathBuf) -> Result<Self, ConfigError> {
        if let Some(manifest_path) = &raw.manifest_path {
            if !paths::is_nonempty_absolute(manifest_path) {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "manifest_path",
                    message: "must be an absolute path".to_string(),
                });
            }
        }
        if let Some(uat_script) = &raw.uat_script {
            if !paths::is_nonempty_relative(uat_script) {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "uat_script",
                    message: "must be a relative path under the install directory".to_string(),
                });
            }
        }

        Ok(Self {
            manifest_path: raw.manifest_path,
            uat_script: raw.uat_script,
        })
    }
}

/// Location of the configuration file for this user, if resolvable.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "uatx")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
