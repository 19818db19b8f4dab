use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use super::artifact::{has_optional_asset, replace_artifact, ArtifactBackup};
use crate::config::MigrateOptions;
use crate::error::{Result, ScaffoldError};
use crate::project::{OperatorType, ProjectContext, ProjectInspector, PLAYBOOK_FILE};
use crate::scaffold::{
    ansible_template_set, helm_template_set, load_header, AnsibleDockerfile, HelmDockerfile,
    Scaffold, TemplateSpec, DOCKERFILE_FILE,
};

/// Template set chosen for a detected operator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationPlan {
    Ansible { playbook: bool },
    Helm,
}

impl MigrationPlan {
    /// Pick the plan for `operator_type`, probing optional assets under
    /// `project_root`.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnsupportedMigrationType`] for anything but Ansible
    /// and Helm.
    pub fn for_type(operator_type: OperatorType, project_root: &Path) -> Result<Self> {
        match operator_type {
            OperatorType::Ansible => {
                let playbook = has_optional_asset(&project_root.join(PLAYBOOK_FILE));
                if !playbook {
                    warn!("No playbook was found, so not including it in the new Dockerfile");
                }
                Ok(MigrationPlan::Ansible { playbook })
            }
            OperatorType::Helm => Ok(MigrationPlan::Helm),
            other => Err(ScaffoldError::UnsupportedMigrationType(other)),
        }
    }

    pub fn operator_type(&self) -> OperatorType {
        match self {
            MigrationPlan::Ansible { .. } => OperatorType::Ansible,
            MigrationPlan::Helm => OperatorType::Helm,
        }
    }

    /// Ordered templates for this plan.
    pub fn templates(&self) -> Vec<TemplateSpec> {
        match *self {
            MigrationPlan::Ansible { playbook } => ansible_template_set(AnsibleDockerfile {
                watches: true,
                roles: true,
                playbook,
            }),
            MigrationPlan::Helm => helm_template_set(HelmDockerfile {
                watches: true,
                helm_charts: true,
            }),
        }
    }
}

/// Outcome of a successful migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub operator_type: OperatorType,
    /// Backup of the replaced Dockerfile, if there was one
    pub backup: Option<ArtifactBackup>,
    /// Every file written, in order
    pub written: Vec<PathBuf>,
}

/// Turns an Ansible or Helm operator project into a hybrid Go project.
///
/// Stages run in a fixed order and the first failure ends the run:
///
/// ```text
/// type dispatch → artifact replacement → header load → template execution
/// ```
///
/// Files written before a failure are left in place. Re-running is safe:
/// templates overwrite their outputs with identical content, and an earlier
/// backup is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct Migrator {
    options: MigrateOptions,
}

impl Migrator {
    pub fn new(options: MigrateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MigrateOptions {
        &self.options
    }

    /// Inspect the project at `project_root` and migrate it.
    ///
    /// The operator type is checked before the import path is resolved so an
    /// unsupported project fails with [`ScaffoldError::UnsupportedMigrationType`].
    pub fn run(&self, project_root: &Path) -> Result<MigrationReport> {
        let inspector = ProjectInspector::new(project_root);
        inspector.check_project_root()?;

        let operator_type = inspector.detect_type();
        let plan = MigrationPlan::for_type(operator_type, project_root)?;
        if inspector.has_go_sources() {
            info!("Project already has Go sources, regenerating them");
        }

        let repo = inspector.resolve_import_path(self.options.repo.as_deref())?;
        let ctx = ProjectContext::new(repo, project_root);
        self.execute(&ctx, plan)
    }

    /// Migrate the project described by `ctx` as `operator_type`.
    pub fn migrate(&self, ctx: &ProjectContext, operator_type: OperatorType) -> Result<MigrationReport> {
        let plan = MigrationPlan::for_type(operator_type, ctx.abs_project_path())?;
        self.execute(ctx, plan)
    }

    fn execute(&self, ctx: &ProjectContext, plan: MigrationPlan) -> Result<MigrationReport> {
        let operator_type = plan.operator_type();
        let span = info_span!("migrate", operator = %operator_type, project = %ctx.project_name());
        let _enter = span.enter();

        let backup = replace_artifact(&ctx.join(DOCKERFILE_FILE))?;

        // An empty path means "no header", not the project root.
        let header_path = self
            .options
            .header_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| ctx.join(p));
        let header = load_header(header_path.as_deref())?;
        let has_header = header.is_some();
        let scaffold = Scaffold::new(ctx).with_header(header);

        let mut written = Vec::new();
        if has_header {
            written.extend(scaffold.execute(&[TemplateSpec::Boilerplate])?);
        }
        written.extend(scaffold.execute(&plan.templates())?);

        info!(files = written.len(), "Migration of {} operator complete", operator_type);
        Ok(MigrationReport {
            operator_type,
            backup,
            written,
        })
    }
}
