//! Run configuration.
//!
//! Options are passed explicitly into [`Migrator`](crate::migrate::Migrator)
//! and [`OpenApiGenerator`](crate::openapi::OpenApiGenerator). Values come
//! from CLI flags (or their environment variables) and fall back to an
//! optional `opscaffold.toml` at the project root:
//!
//! ```toml
//! repo = "github.com/example-inc/memcached-operator"
//! header_file = "hack/license.txt"
//!
//! [openapi]
//! engine = "/usr/local/bin/openapi-gen"
//! api_dir = "pkg/apis"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "opscaffold.toml";
/// Default API source root.
pub const DEFAULT_APIS_DIR: &str = "pkg/apis";
/// Default external OpenAPI generator binary.
pub const DEFAULT_OPENAPI_ENGINE: &str = "openapi-gen";

/// Contents of `opscaffold.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Go import path of the project
    #[serde(default)]
    pub repo: Option<String>,
    /// License header file, relative to the project root
    #[serde(default)]
    pub header_file: Option<PathBuf>,
    /// OpenAPI generation settings
    #[serde(default)]
    pub openapi: OpenApiConfig,
}

/// `[openapi]` table of `opscaffold.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiConfig {
    /// Generator binary name or path
    #[serde(default)]
    pub engine: Option<String>,
    /// API source root, relative to the project root
    #[serde(default)]
    pub api_dir: Option<PathBuf>,
}

/// Load `opscaffold.toml` from `project_root`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// [`ScaffoldError::ConfigLoadFailed`] if the file exists but cannot be read
/// or parsed.
pub fn load_project_config(project_root: &Path) -> Result<Option<ProjectConfig>> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let contents =
        std::fs::read_to_string(&path).map_err(|e| ScaffoldError::ConfigLoadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    let config: ProjectConfig =
        toml::from_str(&contents).map_err(|e| ScaffoldError::ConfigLoadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    Ok(Some(config))
}

/// Options for one `migrate` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateOptions {
    /// License header source; `None` generates files without a header
    pub header_file: Option<PathBuf>,
    /// Explicit Go import path; `None` derives it from the project
    pub repo: Option<String>,
}

impl MigrateOptions {
    /// Fill unset options from `config`. Relative paths in the config are
    /// resolved against `project_root`.
    pub fn with_defaults_from(mut self, config: Option<&ProjectConfig>, project_root: &Path) -> Self {
        let Some(config) = config else {
            return self;
        };
        if self.repo.as_deref().map_or(true, str::is_empty) {
            self.repo = config.repo.clone().or(self.repo);
        }
        if self.header_file.is_none() {
            self.header_file = config
                .header_file
                .as_ref()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| project_root.join(p));
        }
        self
    }
}

/// Options for one `generate openapi` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiOptions {
    /// API source root, relative to the project root
    pub api_dir: PathBuf,
    /// Generator binary name or path
    pub engine: String,
}

impl Default for OpenApiOptions {
    fn default() -> Self {
        Self {
            api_dir: PathBuf::from(DEFAULT_APIS_DIR),
            engine: DEFAULT_OPENAPI_ENGINE.to_string(),
        }
    }
}

impl OpenApiOptions {
    /// Build options from explicit values, falling back to `config` and then
    /// to the defaults.
    pub fn resolve(
        api_dir: Option<PathBuf>,
        engine: Option<String>,
        config: Option<&ProjectConfig>,
    ) -> Self {
        let defaults = Self::default();
        let from_config = config.map(|c| &c.openapi);
        Self {
            api_dir: api_dir
                .or_else(|| from_config.and_then(|c| c.api_dir.clone()))
                .unwrap_or(defaults.api_dir),
            engine: engine
                .or_else(|| from_config.and_then(|c| c.engine.clone()))
                .unwrap_or(defaults.engine),
        }
    }
}
