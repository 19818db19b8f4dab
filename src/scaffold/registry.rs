use askama::Template;

use super::boilerplate::BoilerplateHeader;
use super::templates::{
    AnsibleDockerfileTemplate, AnsibleEntrypointTemplate, AnsibleGoModTemplate,
    AnsibleMainTemplate, AnsibleUserSetupTemplate, AoLogsTemplate, HelmDockerfileTemplate,
    HelmEntrypointTemplate, HelmGoModTemplate, HelmMainTemplate, HelmUserSetupTemplate,
    ToolsTemplate,
};
use crate::project::ProjectContext;

/// Path the header file is copied to.
pub const BOILERPLATE_FILE: &str = "hack/boilerplate.go.txt";
/// Build artifact replaced by a migration.
pub const DOCKERFILE_FILE: &str = "build/Dockerfile";

/// Backend a hybrid template is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Ansible roles/playbook operator
    Ansible,
    /// Helm chart operator
    Helm,
}

/// Optional sections of the Ansible hybrid Dockerfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsibleDockerfile {
    /// Copy `watches.yaml` into the image
    pub watches: bool,
    /// Copy `roles/` into the image
    pub roles: bool,
    /// Copy `playbook.yml` into the image
    pub playbook: bool,
}

/// Optional sections of the Helm hybrid Dockerfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelmDockerfile {
    /// Copy `watches.yaml` into the image
    pub watches: bool,
    /// Copy `helm-charts/` into the image
    pub helm_charts: bool,
}

/// A named generator for one output file.
///
/// Rendering is a pure function of the [`ProjectContext`], the variant's own
/// flags and (for [`TemplateSpec::Boilerplate`] only) the loaded header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSpec {
    /// Copy of the license header
    Boilerplate,
    /// `go.mod` pinning the operator SDK
    GoMod(Backend),
    /// `tools.go` build-tag file
    Tools,
    /// `cmd/manager/main.go` entry point
    Main(Backend),
    /// Hybrid Dockerfile for an Ansible operator
    AnsibleDockerfile(AnsibleDockerfile),
    /// Hybrid Dockerfile for a Helm operator
    HelmDockerfile(HelmDockerfile),
    /// `bin/entrypoint` script
    Entrypoint(Backend),
    /// `bin/user_setup` script
    UserSetup(Backend),
    /// `bin/ao-logs` script (Ansible only)
    AoLogs,
}

impl TemplateSpec {
    /// Identifier used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateSpec::Boilerplate => "boilerplate",
            TemplateSpec::GoMod(Backend::Ansible) => "ansible-go-mod",
            TemplateSpec::GoMod(Backend::Helm) => "helm-go-mod",
            TemplateSpec::Tools => "tools",
            TemplateSpec::Main(Backend::Ansible) => "ansible-main",
            TemplateSpec::Main(Backend::Helm) => "helm-main",
            TemplateSpec::AnsibleDockerfile(_) => "ansible-dockerfile-hybrid",
            TemplateSpec::HelmDockerfile(_) => "helm-dockerfile-hybrid",
            TemplateSpec::Entrypoint(Backend::Ansible) => "ansible-entrypoint",
            TemplateSpec::Entrypoint(Backend::Helm) => "helm-entrypoint",
            TemplateSpec::UserSetup(Backend::Ansible) => "ansible-user-setup",
            TemplateSpec::UserSetup(Backend::Helm) => "helm-user-setup",
            TemplateSpec::AoLogs => "ao-logs",
        }
    }

    /// Output path relative to the project root.
    pub fn path(&self) -> &'static str {
        match self {
            TemplateSpec::Boilerplate => BOILERPLATE_FILE,
            TemplateSpec::GoMod(_) => "go.mod",
            TemplateSpec::Tools => "tools.go",
            TemplateSpec::Main(_) => "cmd/manager/main.go",
            TemplateSpec::AnsibleDockerfile(_) | TemplateSpec::HelmDockerfile(_) => DOCKERFILE_FILE,
            TemplateSpec::Entrypoint(_) => "bin/entrypoint",
            TemplateSpec::UserSetup(_) => "bin/user_setup",
            TemplateSpec::AoLogs => "bin/ao-logs",
        }
    }

    /// Go sources get the license header prepended.
    pub fn supports_header(&self) -> bool {
        matches!(self, TemplateSpec::Tools | TemplateSpec::Main(_))
    }

    /// Scripts copied into the image and run directly.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            TemplateSpec::Entrypoint(_) | TemplateSpec::UserSetup(_) | TemplateSpec::AoLogs
        )
    }

    /// Render the template body, without any header.
    pub fn render(
        &self,
        ctx: &ProjectContext,
        header: Option<&BoilerplateHeader>,
    ) -> askama::Result<String> {
        let repo = ctx.repo().to_string();
        let project_name = ctx.project_name().to_string();
        match *self {
            TemplateSpec::Boilerplate => Ok(header.map(|h| h.text().to_string()).unwrap_or_default()),
            TemplateSpec::GoMod(Backend::Ansible) => AnsibleGoModTemplate { repo }.render(),
            TemplateSpec::GoMod(Backend::Helm) => HelmGoModTemplate { repo }.render(),
            TemplateSpec::Tools => ToolsTemplate.render(),
            TemplateSpec::Main(Backend::Ansible) => AnsibleMainTemplate { project_name }.render(),
            TemplateSpec::Main(Backend::Helm) => HelmMainTemplate { project_name }.render(),
            TemplateSpec::AnsibleDockerfile(flags) => AnsibleDockerfileTemplate {
                project_name,
                watches: flags.watches,
                roles: flags.roles,
                playbook: flags.playbook,
            }
            .render(),
            TemplateSpec::HelmDockerfile(flags) => HelmDockerfileTemplate {
                project_name,
                watches: flags.watches,
                helm_charts: flags.helm_charts,
            }
            .render(),
            TemplateSpec::Entrypoint(Backend::Ansible) => AnsibleEntrypointTemplate.render(),
            TemplateSpec::Entrypoint(Backend::Helm) => HelmEntrypointTemplate.render(),
            TemplateSpec::UserSetup(Backend::Ansible) => AnsibleUserSetupTemplate.render(),
            TemplateSpec::UserSetup(Backend::Helm) => HelmUserSetupTemplate.render(),
            TemplateSpec::AoLogs => AoLogsTemplate.render(),
        }
    }
}

/// Ordered templates that turn an Ansible operator into a hybrid one.
///
/// `go.mod` comes first and the Dockerfile after the entry point it builds.
pub fn ansible_template_set(dockerfile: AnsibleDockerfile) -> Vec<TemplateSpec> {
    vec![
        TemplateSpec::GoMod(Backend::Ansible),
        TemplateSpec::Tools,
        TemplateSpec::Main(Backend::Ansible),
        TemplateSpec::AnsibleDockerfile(dockerfile),
        TemplateSpec::Entrypoint(Backend::Ansible),
        TemplateSpec::UserSetup(Backend::Ansible),
        TemplateSpec::AoLogs,
    ]
}

/// Ordered templates that turn a Helm operator into a hybrid one.
pub fn helm_template_set(dockerfile: HelmDockerfile) -> Vec<TemplateSpec> {
    vec![
        TemplateSpec::GoMod(Backend::Helm),
        TemplateSpec::Tools,
        TemplateSpec::Main(Backend::Helm),
        TemplateSpec::HelmDockerfile(dockerfile),
        TemplateSpec::Entrypoint(Backend::Helm),
        TemplateSpec::UserSetup(Backend::Helm),
    ]
}
