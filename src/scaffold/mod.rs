//! # Scaffold Module
//!
//! Template registry and file writer used by the migration.
//!
//! ## Overview
//!
//! - [`TemplateSpec`] - one named output file: identifier, project-relative
//!   path and a pure render function over [`ProjectContext`](crate::project::ProjectContext)
//! - [`ansible_template_set`] / [`helm_template_set`] - the fixed, ordered
//!   template lists for each backend
//! - [`BoilerplateHeader`] - optional license header loaded once per run
//! - [`Scaffold`] - renders templates, prepends the header to Go sources and
//!   writes the results in order
//!
//! ## Templates
//!
//! Bodies are Askama templates under `templates/`:
//!
//! | Template        | Output                 | Header |
//! |-----------------|------------------------|--------|
//! | boilerplate     | `hack/boilerplate.go.txt` | copy |
//! | go-mod          | `go.mod`               | no     |
//! | tools           | `tools.go`             | yes    |
//! | main            | `cmd/manager/main.go`  | yes    |
//! | dockerfile      | `build/Dockerfile`     | no     |
//! | entrypoint      | `bin/entrypoint`       | no     |
//! | user-setup      | `bin/user_setup`       | no     |
//! | ao-logs         | `bin/ao-logs` (Ansible)| no     |

mod boilerplate;
mod executor;
mod registry;
mod templates;

pub use boilerplate::{load_header, BoilerplateHeader};
pub use executor::Scaffold;
pub use registry::{
    ansible_template_set, helm_template_set, AnsibleDockerfile, Backend, HelmDockerfile,
    TemplateSpec, BOILERPLATE_FILE, DOCKERFILE_FILE,
};
