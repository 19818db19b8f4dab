use std::path::{Component, Path, PathBuf};

use tracing::info;

use super::engine::{GenerationArgs, OpenApiEngine};
use super::group_versions::{create_fq_apis, describe_group_versions, parse_group_subpackages};
use crate::error::{Result, ScaffoldError};
use crate::project::ProjectContext;
use crate::scaffold::BOILERPLATE_FILE;

/// One `(group, version)` API package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPackage {
    pub group: String,
    pub version: String,
    /// Import path, e.g. `github.com/example-inc/op/pkg/apis/apps/v1`
    pub fq_path: String,
    /// Directory relative to the project root, e.g. `pkg/apis/apps/v1`
    pub rel_dir: String,
}

/// Drives an [`OpenApiEngine`] once per API package of a project.
#[derive(Debug)]
pub struct OpenApiGenerator<E> {
    ctx: ProjectContext,
    engine: E,
}

impl<E: OpenApiEngine> OpenApiGenerator<E> {
    pub fn new(ctx: ProjectContext, engine: E) -> Self {
        Self { ctx, engine }
    }

    /// Packages under `api_root` (relative to the project root).
    pub fn discover(&self, api_root: &Path) -> Result<Vec<ApiPackage>> {
        let rel_root = relative_api_root(&self.ctx, api_root)?;
        let gvs = parse_group_subpackages(&self.ctx.join(&rel_root))?;
        info!(
            "Running OpenAPI code-generation for Custom Resource group versions: [{}]",
            describe_group_versions(&gvs)
        );

        let apis_pkg = format!("{}/{}", self.ctx.repo().trim_end_matches('/'), rel_root);
        let fq_apis = create_fq_apis(&apis_pkg, &gvs);
        let mut packages = Vec::with_capacity(fq_apis.len());
        let pairs = gvs
            .iter()
            .flat_map(|(group, versions)| versions.iter().map(move |version| (group, version)));
        for ((group, version), fq_path) in pairs.zip(fq_apis) {
            packages.push(ApiPackage {
                group: group.clone(),
                version: version.clone(),
                fq_path,
                rel_dir: format!("{rel_root}/{group}/{version}"),
            });
        }
        Ok(packages)
    }

    /// Generate OpenAPI definitions for every package under `api_root`.
    ///
    /// Packages are generated one after another; the first failure stops the
    /// loop. Returns the fully-qualified paths of the generated packages.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::GroupVersionParseFailed`] if discovery fails
    /// - [`ScaffoldError::GenerationEngineFailed`] naming the failing package
    pub fn generate(&self, api_root: &Path) -> Result<Vec<String>> {
        let packages = self.discover(api_root)?;
        let header = HeaderFile::for_project(&self.ctx)?;

        let mut generated = Vec::with_capacity(packages.len());
        for package in &packages {
            let args = GenerationArgs::new(
                format!("./{}", package.rel_dir),
                self.ctx.join(&package.rel_dir),
                header.path(),
            );
            let engine_failed = |e: anyhow::Error| ScaffoldError::GenerationEngineFailed {
                package_path: package.fq_path.clone(),
                reason: format!("{e:#}"),
            };
            args.validate().map_err(engine_failed)?;
            self.engine.generate(&args).map_err(engine_failed)?;
            info!(package = %package.fq_path, "Generated OpenAPI definitions");
            generated.push(package.fq_path.clone());
        }

        info!("Code-generation complete.");
        Ok(generated)
    }
}

/// `api_root` as a `/`-separated path relative to the project root.
fn relative_api_root(ctx: &ProjectContext, api_root: &Path) -> Result<String> {
    let rel = api_root
        .strip_prefix(ctx.abs_project_path())
        .unwrap_or(api_root);
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => {
                return Err(ScaffoldError::GroupVersionParseFailed {
                    dir: api_root.to_path_buf(),
                    reason: "API directory must be inside the project".to_string(),
                })
            }
        }
    }
    if parts.is_empty() {
        return Err(ScaffoldError::GroupVersionParseFailed {
            dir: api_root.to_path_buf(),
            reason: "API directory must not be the project root".to_string(),
        });
    }
    Ok(parts.join("/"))
}

/// Header passed to the generator: the project's boilerplate file, or an
/// empty temporary file removed when this value is dropped.
enum HeaderFile {
    Project(PathBuf),
    Temp(tempfile::NamedTempFile),
}

impl HeaderFile {
    fn for_project(ctx: &ProjectContext) -> Result<Self> {
        let boilerplate = ctx.join(BOILERPLATE_FILE);
        if boilerplate.is_file() {
            return Ok(HeaderFile::Project(boilerplate));
        }
        tempfile::NamedTempFile::new()
            .map(HeaderFile::Temp)
            .map_err(|e| ScaffoldError::GenerationEngineFailed {
                package_path: ctx.repo().to_string(),
                reason: format!("failed to create empty header file: {e}"),
            })
    }

    fn path(&self) -> &Path {
        match self {
            HeaderFile::Project(path) => path,
            HeaderFile::Temp(file) => file.path(),
        }
    }
}
