//! Platform handlers for locating launcher data and registered source builds.
//!
//! Both lookups exist only on Windows; elsewhere the stubs report nothing so
//! discovery degrades to the manifest override from configuration.

use std::path::PathBuf;

/// Registry key listing engine builds registered from source checkouts.
#[cfg(windows)]
const SOURCE_BUILDS_KEY: &str = "SOFTWARE\\Epic Games\\Unreal Engine\\Builds";

/// Per-user data directory maintained by the Epic launcher.
#[cfg(windows)]
pub fn launcher_data_dir() -> Option<PathBuf> {
    let program_data = winsafe::SHGetKnownFolderPath(
        &winsafe::co::KNOWNFOLDERID::ProgramData,
        winsafe::co::KF::DEFAULT,
        None,
    )
    .ok()?;

    Some(PathBuf::from(program_data).join("Epic/UnrealEngineLauncher"))
}

#[cfg(not(windows))]
pub fn launcher_data_dir() -> Option<PathBuf> {
    None
}

/// Directories registered under the source-build key, in value index order.
///
/// A missing or unreadable key yields an empty list. Enumeration ends at the
/// first value that cannot be fetched as a string path; positions in the
/// returned list therefore equal registry value indices.
#[cfg(windows)]
pub fn registered_source_build_dirs() -> Vec<PathBuf> {
    use winsafe::prelude::advapi_Hkey;

    let Ok(hkey) = winsafe::HKEY::CURRENT_USER.RegOpenKeyEx(
        Some(SOURCE_BUILDS_KEY),
        winsafe::co::REG_OPTION::default(),
        winsafe::co::KEY::READ,
    ) else {
        return Vec::new();
    };
    let Ok(values) = hkey.RegEnumValue() else {
        return Vec::new();
    };

    let mut dirs = Vec::new();
    for item in values {
        // The enumeration does not return value data, so fetch each name separately.
        let Ok((value_name, _)) = item else { break };
        match hkey.RegGetValue(None, Some(&value_name)) {
            Ok(winsafe::RegistryValue::Sz(path)) => dirs.push(PathBuf::from(path)),
            // Anything but a string path ends the scan.
            _ => break,
        }
    }
    dirs
}

#[cfg(not(windows))]
pub fn registered_source_build_dirs() -> Vec<PathBuf> {
    Vec::new()
}
