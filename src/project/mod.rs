//! # Project Module
//!
//! Inspects the operator project that a command runs against.
//!
//! ## Overview
//!
//! - [`OperatorType`] - which automation backend the project is built on,
//!   detected from marker files at the project root
//! - [`ProjectInspector`] - project-root check, type detection and Go import
//!   path resolution
//! - [`ProjectContext`] - the immutable view of the project handed to every
//!   template
//!
//! ## Markers
//!
//! ```text
//! my-operator/
//! ├── build/Dockerfile        # project root marker (or watches.yaml)
//! ├── watches.yaml
//! ├── roles/                  # Ansible
//! ├── helm-charts/            # Helm
//! └── cmd/manager/main.go     # Go (present in hybrid projects too)
//! ```
//!
//! A hybrid project keeps its Ansible or Helm marker, so it is detected by
//! its backend and can be migrated again.

mod context;
mod inspect;

pub use context::ProjectContext;
pub use inspect::{check_repo, parse_go_mod_module, ProjectInspector};

use std::fmt;

/// Directory holding Ansible roles.
pub const ROLES_DIR: &str = "roles";
/// Directory holding Helm charts.
pub const HELM_CHARTS_DIR: &str = "helm-charts";
/// Entry point of a Go (or hybrid) operator.
pub const MAIN_FILE: &str = "cmd/manager/main.go";
/// Build directory; its presence marks the project root.
pub const BUILD_DIR: &str = "build";
/// Watches file shared by Ansible and Helm operators.
pub const WATCHES_FILE: &str = "watches.yaml";
/// Go module descriptor.
pub const GO_MOD_FILE: &str = "go.mod";
/// Optional Ansible playbook.
pub const PLAYBOOK_FILE: &str = "playbook.yml";

/// Automation backend of an operator project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorType {
    /// Ansible roles/playbooks
    Ansible,
    /// Helm charts
    Helm,
    /// Native Go controller
    Go,
    /// No marker, or conflicting markers
    Unknown,
}

impl OperatorType {
    /// Lower-case name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorType::Ansible => "ansible",
            OperatorType::Helm => "helm",
            OperatorType::Go => "go",
            OperatorType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
