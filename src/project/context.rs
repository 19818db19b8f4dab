use std::path::{Path, PathBuf};

/// Read-only description of the project being scaffolded.
///
/// Built once per run and shared by every template invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    repo: String,
    abs_project_path: PathBuf,
    project_name: String,
}

impl ProjectContext {
    /// Create a context for the project rooted at `abs_project_path`.
    ///
    /// The project name is the base name of the root directory.
    pub fn new(repo: impl Into<String>, abs_project_path: impl Into<PathBuf>) -> Self {
        let abs_project_path = abs_project_path.into();
        let project_name = abs_project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            repo: repo.into(),
            abs_project_path,
            project_name,
        }
    }

    /// Go import path of the project (e.g. `github.com/example-inc/memcached-operator`).
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Absolute path of the project root.
    pub fn abs_project_path(&self) -> &Path {
        &self.abs_project_path
    }

    /// Base name of the project root.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Resolve a project-relative path against the root.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.abs_project_path.join(rel)
    }
}
