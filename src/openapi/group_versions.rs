use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// API group name to its version directories, in discovery order.
pub type GroupVersionMap = BTreeMap<String, Vec<String>>;

/// Discover `{group: [versions]}` under `apis_dir`.
///
/// Every directory in `apis_dir` is a group; each directory inside a group
/// that directly holds a `.go` file is a version. Empty version directories
/// are skipped so the generator never gets an input without sources.
/// Entries are visited in file-name order.
///
/// # Errors
///
/// [`ScaffoldError::GroupVersionParseFailed`] if a directory cannot be read
/// or no group/version is found.
pub fn parse_group_subpackages(apis_dir: &Path) -> Result<GroupVersionMap> {
    let fail = |reason: String| ScaffoldError::GroupVersionParseFailed {
        dir: apis_dir.to_path_buf(),
        reason,
    };

    let mut gvs = GroupVersionMap::new();
    for group in sorted_dirs(apis_dir).map_err(|e| fail(e.to_string()))? {
        let group_dir = apis_dir.join(&group);
        for version in sorted_dirs(&group_dir).map_err(|e| fail(e.to_string()))? {
            let version_dir = group_dir.join(&version);
            let has_go = contains_go_file(&version_dir).map_err(|e| fail(e.to_string()))?;
            if has_go {
                gvs.entry(group.clone()).or_default().push(version);
            }
        }
    }

    if gvs.is_empty() {
        return Err(fail("no groups or versions found".to_string()));
    }
    Ok(gvs)
}

/// `<pkg>/<group>/<version>` for every pair in `gvs`.
pub fn create_fq_apis(pkg: &str, gvs: &GroupVersionMap) -> Vec<String> {
    let pkg = pkg.trim_end_matches('/');
    gvs.iter()
        .flat_map(|(group, versions)| {
            versions
                .iter()
                .map(move |version| format!("{pkg}/{group}/{version}"))
        })
        .collect()
}

/// `apps:[v1, v1alpha1], core:[v1]`
pub fn describe_group_versions(gvs: &GroupVersionMap) -> String {
    gvs.iter()
        .map(|(group, versions)| format!("{group}:[{}]", versions.join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn sorted_dirs(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn contains_go_file(dir: &Path) -> std::io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && path.extension().is_some_and(|ext| ext == "go") {
            return Ok(true);
        }
    }
    Ok(false)
}
