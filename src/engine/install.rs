//! Engine install records, discovery sources, and name resolution.

use std::path::PathBuf;

use tracing::info;

use crate::lib::errors::DiscoveryError;

/// One usable engine installation: a short name and its base directory.
///
/// The path is taken verbatim from the discovery source; no normalization or
/// existence check is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInstall {
    pub name: String,
    pub path: PathBuf,
}

/// A collaborator that can enumerate engine installations.
pub trait InstallSource {
    /// Short label used in logs.
    fn label(&self) -> &'static str;

    /// Enumerate the installs this source knows about, in discovery order.
    fn installs(&self) -> Result<Vec<EngineInstall>, DiscoveryError>;
}

/// Collect records from every source into one ordered list.
///
/// Source order is preserved, and within a source, discovery order. Duplicate
/// names are kept; [`resolve`] settles collisions by first match.
pub fn discover_installs(
    sources: &[&dyn InstallSource],
) -> Result<Vec<EngineInstall>, DiscoveryError> {
    let mut merged = Vec::new();
    for source in sources {
        let found = source.installs()?;
        info!(
            target: "uatx::engine",
            source = source.label(),
            count = found.len(),
            "Enumerated engine installs"
        );
        merged.extend(found);
    }
    Ok(merged)
}

/// First exact, case-sensitive match in list order.
pub fn resolve<'a>(installs: &'a [EngineInstall], requested: &str) -> Option<&'a EngineInstall> {
    installs.iter().find(|install| install.name == requested)
}
