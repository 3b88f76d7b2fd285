//! Launcher manifest discovery (`LauncherInstalled.dat`).

use std::{fs, path::PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::install::{EngineInstall, InstallSource};
use super::platform;
use crate::lib::errors::DiscoveryError;

/// `AppName` marker identifying engine builds among launcher entries. The
/// manifest also lists editors and plugins, which never carry it.
pub const ENGINE_APP_PREFIX: &str = "UE_";

/// Manifest location relative to the per-user launcher data directory.
pub const MANIFEST_RELATIVE_PATH: &str = "LauncherInstalled.dat";

#[derive(Debug, Deserialize)]
struct LauncherManifest {
    // Entries stay untyped: one bad record must not abort the whole read.
    #[serde(rename = "InstallationList", default)]
    installation_list: Vec<Value>,
}

/// Install source backed by the launcher manifest file.
#[derive(Debug)]
pub struct LauncherManifestSource {
    manifest_path: Option<PathBuf>,
}

impl LauncherManifestSource {
    /// Locate the manifest under the platform launcher data directory.
    pub fn locate() -> Self {
        Self {
            manifest_path: platform::launcher_data_dir()
                .map(|dir| dir.join(MANIFEST_RELATIVE_PATH)),
        }
    }

    /// Use an explicit manifest path (configuration override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            manifest_path: Some(path),
        }
    }
}

impl InstallSource for LauncherManifestSource {
    fn label(&self) -> &'static str {
        "launcher-manifest"
    }

    fn installs(&self) -> Result<Vec<EngineInstall>, DiscoveryError> {
        let path = self
            .manifest_path
            .as_deref()
            .ok_or(DiscoveryError::DataDirUnavailable)?;
        debug!(target: "uatx::engine", path = %path.display(), "Reading launcher manifest");

        let text = fs::read_to_string(path).map_err(|source| DiscoveryError::ManifestNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: LauncherManifest =
            serde_json::from_str(&text).map_err(|source| DiscoveryError::ManifestMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(engine_entries(&manifest.installation_list))
    }
}

/// Extract engine records from the `InstallationList` array.
///
/// Entries with a missing or non-string `AppName`/`InstallLocation` are
/// skipped silently, as are entries without the engine marker. The first
/// occurrence of the marker is stripped, so `UE_5.3` resolves as `5.3`.
fn engine_entries(entries: &[Value]) -> Vec<EngineInstall> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = entry.get("AppName")?.as_str()?;
            let location = entry.get("InstallLocation")?.as_str()?;
            name.find(ENGINE_APP_PREFIX)?;
            Some(EngineInstall {
                name: name.replacen(ENGINE_APP_PREFIX, "", 1),
                path: PathBuf::from(location),
            })
        })
        .collect()
}
