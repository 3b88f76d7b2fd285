//! Engine install discovery and resolution.
//!
//! Two collaborators feed one record shape: the launcher manifest and the
//! per-user registry key for source builds. Both implement [`InstallSource`].

pub mod install;
pub mod launcher;
pub mod platform;
pub mod source_builds;

pub use install::{discover_installs, resolve, EngineInstall, InstallSource};
pub use launcher::{LauncherManifestSource, ENGINE_APP_PREFIX, MANIFEST_RELATIVE_PATH};
pub use source_builds::{SourceBuildsSource, SOURCE_BUILD_PREFIX};
