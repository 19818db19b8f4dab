use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, ScaffoldError};

/// Suffix appended to a replaced artifact.
pub const BACKUP_SUFFIX: &str = ".sdkold";

/// Record of an artifact moved aside before being regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBackup {
    /// Path the artifact used to live at (and the new one is written to).
    pub original: PathBuf,
    /// Where the previous content now lives.
    pub backup: PathBuf,
}

/// `<path>.sdkold`
pub fn backup_path_for(path: &Path) -> PathBuf {
    with_suffix(path, BACKUP_SUFFIX)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// First backup path that does not exist yet: `<path>.sdkold`, then
/// `<path>.sdkold.1`, `<path>.sdkold.2`, ...
fn next_free_backup(path: &Path) -> PathBuf {
    let primary = backup_path_for(path);
    if !primary.exists() {
        return primary;
    }
    let mut n = 1u32;
    loop {
        let candidate = with_suffix(&primary, &format!(".{n}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Move the artifact at `path` to its backup path.
///
/// A missing artifact is not an error and yields `Ok(None)`. An existing
/// backup is never overwritten; the artifact goes to the next free numbered
/// backup path instead.
///
/// # Errors
///
/// [`ScaffoldError::ArtifactReplaceFailed`] if the artifact cannot be
/// inspected or renamed. The artifact is left where it was.
pub fn replace_artifact(path: &Path) -> Result<Option<ArtifactBackup>> {
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No existing artifact found, nothing to back up");
            return Ok(None);
        }
        Err(source) => {
            return Err(ScaffoldError::ArtifactReplaceFailed {
                path: path.to_path_buf(),
                backup: backup_path_for(path),
                source,
            })
        }
    }

    let backup = next_free_backup(path);
    if backup != backup_path_for(path) {
        warn!(
            existing = %backup_path_for(path).display(),
            backup = %backup.display(),
            "Backup from an earlier migration exists, keeping it"
        );
    }
    fs::rename(path, &backup).map_err(|source| ScaffoldError::ArtifactReplaceFailed {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    info!(
        "Renamed {} to {} and replaced with newer version. Compare the new file to your old one and manually migrate any customizations",
        path.display(),
        backup.display()
    );
    Ok(Some(ArtifactBackup {
        original: path.to_path_buf(),
        backup,
    }))
}

/// Whether an optional asset (e.g. `playbook.yml`) exists at `path`.
///
/// Absence only changes what gets generated; probe errors count as absent.
pub fn has_optional_asset(path: &Path) -> bool {
    match path.try_exists() {
        Ok(exists) => exists,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not probe optional asset");
            false
        }
    }
}
