use std::ffi::OsString;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{
    OperatorType, BUILD_DIR, GO_MOD_FILE, HELM_CHARTS_DIR, MAIN_FILE, ROLES_DIR, WATCHES_FILE,
};
use crate::error::{Result, ScaffoldError};

/// Reads the marker files of a project rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct ProjectInspector {
    root: PathBuf,
    gopath: Option<OsString>,
}

impl ProjectInspector {
    /// Inspect the project at `root`, taking `GOPATH` from the environment.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            gopath: std::env::var_os("GOPATH"),
        }
    }

    /// Use `gopath` instead of the `GOPATH` environment variable.
    pub fn with_gopath(mut self, gopath: Option<OsString>) -> Self {
        self.gopath = gopath;
        self
    }

    /// Project root this inspector reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail with [`ScaffoldError::NotInProjectRoot`] unless the root holds a
    /// `build/` directory or a `watches.yaml`.
    pub fn check_project_root(&self) -> Result<()> {
        if self.root.join(BUILD_DIR).is_dir() || self.root.join(WATCHES_FILE).is_file() {
            return Ok(());
        }
        Err(ScaffoldError::NotInProjectRoot {
            dir: self.root.clone(),
        })
    }

    /// Determine the operator type from on-disk markers.
    ///
    /// Exactly one of the Ansible and Helm markers decides the type, whether
    /// or not Go sources are present as well. Go is reported only when
    /// neither backend marker exists.
    pub fn detect_type(&self) -> OperatorType {
        let ansible = self.root.join(ROLES_DIR).is_dir();
        let helm = self.root.join(HELM_CHARTS_DIR).is_dir();
        let go = self.has_go_sources();
        debug!(ansible, helm, go, root = %self.root.display(), "operator type markers");
        match (ansible, helm, go) {
            (true, false, _) => OperatorType::Ansible,
            (false, true, _) => OperatorType::Helm,
            (false, false, true) => OperatorType::Go,
            _ => OperatorType::Unknown,
        }
    }

    /// Whether the Go manager entry point already exists.
    pub fn has_go_sources(&self) -> bool {
        self.root.join(MAIN_FILE).is_file()
    }

    /// Resolve the project's Go import path.
    ///
    /// Order: `explicit_override` (when non-empty), the `module` directive of
    /// `go.mod`, then the project's location under `$GOPATH/src`.
    pub fn resolve_import_path(&self, explicit_override: Option<&str>) -> Result<String> {
        if let Some(repo) = explicit_override.filter(|r| !r.is_empty()) {
            check_repo(repo)?;
            return Ok(repo.to_string());
        }
        if let Some(module) = self.import_path_from_go_mod()? {
            debug!(module = %module, "import path from go.mod");
            return Ok(module);
        }
        self.import_path_from_gopath()
    }

    fn import_path_from_go_mod(&self) -> Result<Option<String>> {
        let go_mod = self.root.join(GO_MOD_FILE);
        if !go_mod.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&go_mod).map_err(|e| {
            ScaffoldError::UnresolvableImportPath {
                reason: format!("failed to read {}: {e}", go_mod.display()),
            }
        })?;
        match parse_go_mod_module(&contents) {
            Some(module) => Ok(Some(module)),
            None => Err(ScaffoldError::UnresolvableImportPath {
                reason: format!("{} has no module directive", go_mod.display()),
            }),
        }
    }

    fn import_path_from_gopath(&self) -> Result<String> {
        let src_dirs: Vec<PathBuf> = match self.gopath.as_ref().filter(|g| !g.is_empty()) {
            Some(gopath) => std::env::split_paths(gopath).map(|p| p.join("src")).collect(),
            None => dirs::home_dir()
                .map(|home| vec![home.join("go").join("src")])
                .unwrap_or_default(),
        };

        for src in &src_dirs {
            if let Ok(rel) = self.root.strip_prefix(src) {
                let pkg = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                if !pkg.is_empty() {
                    debug!(pkg = %pkg, gopath_src = %src.display(), "import path from GOPATH");
                    return Ok(pkg);
                }
            }
        }

        Err(ScaffoldError::UnresolvableImportPath {
            reason: format!(
                "{} is not under $GOPATH/src and has no go.mod; set --repo (e.g. github.com/example-inc/my-operator)",
                self.root.display()
            ),
        })
    }
}

/// `module` directive of a `go.mod` file, optionally quoted.
static GO_MOD_MODULE_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*module\s+"?([^"\s]+)"?"#).ok());

/// Validate an explicitly supplied import path.
pub fn check_repo(repo: &str) -> Result<()> {
    let invalid = |why: &str| ScaffoldError::UnresolvableImportPath {
        reason: format!("invalid repo {repo:?}: {why}"),
    };
    if repo.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if repo.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    if repo.starts_with('/') || repo.ends_with('/') {
        return Err(invalid("must not start or end with '/'"));
    }
    Ok(())
}

/// Extract the module path from `go.mod` contents.
pub fn parse_go_mod_module(contents: &str) -> Option<String> {
    GO_MOD_MODULE_REGEX
        .as_ref()?
        .captures(contents)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
