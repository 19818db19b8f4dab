use askama::Template;

/// Template data for the Ansible hybrid `go.mod`
#[derive(Template)]
#[template(path = "ansible/go.mod.txt", escape = "none")]
pub struct AnsibleGoModTemplate {
    /// Go module path
    pub repo: String,
}

/// Template data for the Helm hybrid `go.mod`
#[derive(Template)]
#[template(path = "helm/go.mod.txt", escape = "none")]
pub struct HelmGoModTemplate {
    /// Go module path
    pub repo: String,
}

/// Template for `tools.go`
#[derive(Template)]
#[template(path = "tools.go.txt", escape = "none")]
pub struct ToolsTemplate;

/// Template data for the Ansible manager entry point
#[derive(Template)]
#[template(path = "ansible/main.go.txt", escape = "none")]
pub struct AnsibleMainTemplate {
    /// Project name
    pub project_name: String,
}

/// Template data for the Helm manager entry point
#[derive(Template)]
#[template(path = "helm/main.go.txt", escape = "none")]
pub struct HelmMainTemplate {
    /// Project name
    pub project_name: String,
}

/// Template data for the Ansible hybrid Dockerfile
///
/// Each flag adds the matching `COPY` instruction.
#[derive(Template)]
#[template(path = "ansible/Dockerfile.txt", escape = "none")]
pub struct AnsibleDockerfileTemplate {
    /// Project name (binary name under `build/_output/bin`)
    pub project_name: String,
    /// Copy `watches.yaml`
    pub watches: bool,
    /// Copy `roles/`
    pub roles: bool,
    /// Copy `playbook.yml`
    pub playbook: bool,
}

/// Template data for the Helm hybrid Dockerfile
#[derive(Template)]
#[template(path = "helm/Dockerfile.txt", escape = "none")]
pub struct HelmDockerfileTemplate {
    /// Project name (binary name under `build/_output/bin`)
    pub project_name: String,
    /// Copy `watches.yaml`
    pub watches: bool,
    /// Copy `helm-charts/`
    pub helm_charts: bool,
}

#[derive(Template)]
#[template(path = "ansible/entrypoint.txt", escape = "none")]
pub struct AnsibleEntrypointTemplate;

#[derive(Template)]
#[template(path = "helm/entrypoint.txt", escape = "none")]
pub struct HelmEntrypointTemplate;

#[derive(Template)]
#[template(path = "ansible/user_setup.txt", escape = "none")]
pub struct AnsibleUserSetupTemplate;

#[derive(Template)]
#[template(path = "helm/user_setup.txt", escape = "none")]
pub struct HelmUserSetupTemplate;

/// Template for `bin/ao-logs`, which tails Ansible runner output
#[derive(Template)]
#[template(path = "ansible/ao-logs.txt", escape = "none")]
pub struct AoLogsTemplate;
