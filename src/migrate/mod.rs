//! # Migrate Module
//!
//! Adds Go sources to an Ansible or Helm operator, producing a hybrid
//! project whose operator binary is built from `cmd/manager/main.go`.
//!
//! ## Flow
//!
//! 1. Detect the operator type and pick its template set (Ansible projects
//!    without `playbook.yml` get a Dockerfile without the playbook section)
//! 2. Move `build/Dockerfile` to `build/Dockerfile.sdkold`
//! 3. Load the license header, if one was requested, and copy it to
//!    `hack/boilerplate.go.txt`
//! 4. Write every template of the set in order
//!
//! Every failure aborts the run and nothing is rolled back. The old
//! Dockerfile is only ever renamed, never deleted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use opscaffold::config::MigrateOptions;
//! use opscaffold::migrate::Migrator;
//!
//! # fn main() -> opscaffold::Result<()> {
//! let root = std::env::current_dir().expect("cwd");
//! let report = Migrator::new(MigrateOptions::default()).run(&root)?;
//! println!("migrated {} operator", report.operator_type);
//! # Ok(())
//! # }
//! ```

mod artifact;
mod orchestrator;

pub use artifact::{backup_path_for, has_optional_asset, replace_artifact, ArtifactBackup, BACKUP_SUFFIX};
pub use orchestrator::{MigrationPlan, MigrationReport, Migrator};
