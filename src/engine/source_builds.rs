//! Source builds registered in the per-user registry key.

use std::path::PathBuf;

use super::install::{EngineInstall, InstallSource};
use super::platform;
use crate::lib::errors::DiscoveryError;

/// Name prefix given to registry-discovered builds.
pub const SOURCE_BUILD_PREFIX: &str = "source-";

/// Install source backed by the registry list of source builds.
///
/// The registry names each build with a UUID; those are not user-friendly, so
/// records get synthetic `source-<index>` names from the enumeration position
/// instead.
#[derive(Debug, Default)]
pub struct SourceBuildsSource;

impl InstallSource for SourceBuildsSource {
    fn label(&self) -> &'static str {
        "source-builds"
    }

    /// An absent or unreadable key contributes zero records; never an error.
    fn installs(&self) -> Result<Vec<EngineInstall>, DiscoveryError> {
        Ok(source_build_records(platform::registered_source_build_dirs()))
    }
}

/// Synthesize `source-<index>` records from directories in enumeration order.
pub fn source_build_records(dirs: Vec<PathBuf>) -> Vec<EngineInstall> {
    dirs.into_iter()
        .enumerate()
        .map(|(index, path)| EngineInstall {
            name: format!("{SOURCE_BUILD_PREFIX}{index}"),
            path,
        })
        .collect()
}
