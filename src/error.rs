//! Error types shared by the migration and OpenAPI generation pipelines.
//!
//! Every variant is fatal to the current run. Messages name the step and the
//! file, template or package that failed so a user can fix the cause and
//! re-run.

use std::path::PathBuf;

use thiserror::Error;

use crate::project::OperatorType;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Boxed source error for failures that can come from rendering or I/O.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The top-level error type for opscaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The command was not started from an operator project root.
    #[error(
        "must run command in project root dir: {} has neither a build/ directory nor a watches.yaml",
        .dir.display()
    )]
    NotInProjectRoot {
        /// Directory the command was started from.
        dir: PathBuf,
    },

    /// No import path was given and none could be derived.
    #[error("could not determine project repository path: {reason}")]
    UnresolvableImportPath {
        /// What was tried and why it did not work.
        reason: String,
    },

    /// The detected operator type has no migration template set.
    #[error("operator of type {0} cannot be migrated")]
    UnsupportedMigrationType(OperatorType),

    /// The existing build artifact could not be moved to its backup path.
    #[error("failed to rename {} to {}: {source}", .path.display(), .backup.display())]
    ArtifactReplaceFailed {
        /// Artifact that was being replaced.
        path: PathBuf,
        /// Backup destination.
        backup: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A header file was requested but could not be read.
    #[error("boilerplate scaffold failed: could not read header file {}: {source}", .path.display())]
    HeaderLoadFailed {
        /// Requested header file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A template could not be rendered or its output could not be written.
    #[error("scaffold failed: template {template} ({}): {source}", .path.display())]
    TemplateWriteFailed {
        /// Template name.
        template: String,
        /// Output path of the template.
        path: PathBuf,
        /// Render or I/O error.
        #[source]
        source: BoxError,
    },

    /// API group/version directories could not be discovered.
    #[error("failed to parse group versions in {}: {reason}", .dir.display())]
    GroupVersionParseFailed {
        /// API root that was scanned.
        dir: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The external OpenAPI generator failed for one package.
    #[error("openapi-gen failed for package {package_path}: {reason}")]
    GenerationEngineFailed {
        /// Fully-qualified package path being generated.
        package_path: String,
        /// Engine failure description.
        reason: String,
    },

    /// The project configuration file exists but is invalid.
    #[error("failed to load config {}: {reason}", .path.display())]
    ConfigLoadFailed {
        /// Config file path.
        path: PathBuf,
        /// Read or parse error.
        reason: String,
    },
}

impl ScaffoldError {
    /// Wrap a render or write failure for `template` at `path`.
    pub fn template_write(
        template: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<BoxError>,
    ) -> Self {
        ScaffoldError::TemplateWriteFailed {
            template: template.into(),
            path: path.into(),
            source: source.into(),
        }
    }
}
