use crate::config::{load_project_config, MigrateOptions, OpenApiOptions};
use crate::migrate::Migrator;
use crate::openapi::{ExternalEngine, OpenApiGenerator};
use crate::project::{ProjectContext, ProjectInspector};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for opscaffold
///
/// Every command runs against the operator project in the current directory.
#[derive(Parser, Debug)]
#[command(name = "opscaffold")]
#[command(version, about = "Operator project scaffolding", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add Go sources to an Ansible or Helm operator, making it hybrid
    ///
    /// The existing build/Dockerfile is kept as build/Dockerfile.sdkold;
    /// carry any customizations over by hand.
    Migrate {
        /// File whose contents are prepended to generated Go sources
        #[arg(long, env = "OPSCAFFOLD_HEADER_FILE")]
        header_file: Option<PathBuf>,

        /// Go import path of the project (derived from go.mod or GOPATH if unset)
        #[arg(long, env = "OPSCAFFOLD_REPO")]
        repo: Option<String>,
    },
    /// Run code generators
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },
}

/// Targets of `generate`
#[derive(Subcommand, Debug)]
pub enum GenerateTarget {
    /// Generate OpenAPI definitions for every API group version
    Openapi {
        /// API source root, relative to the project root (default: pkg/apis)
        #[arg(long)]
        api_dir: Option<PathBuf>,

        /// openapi-gen binary to run (default: openapi-gen)
        #[arg(long, env = "OPSCAFFOLD_OPENAPI_GEN")]
        engine: Option<String>,
    },
}

/// Parse the process arguments and run against the current directory.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let project_root = std::env::current_dir().context("failed to determine current directory")?;
    run(cli, &project_root)
}

/// Run `cli` against the project at `project_root`.
pub fn run(cli: Cli, project_root: &Path) -> anyhow::Result<()> {
    let config = load_project_config(project_root)?;
    match cli.command {
        Commands::Migrate { header_file, repo } => {
            let options = MigrateOptions { header_file, repo }
                .with_defaults_from(config.as_ref(), project_root);
            let report = Migrator::new(options).run(project_root)?;
            if let Some(backup) = &report.backup {
                println!(
                    "Renamed {} to {}. Migrate any customizations manually.",
                    backup.original.display(),
                    backup.backup.display()
                );
            }
            println!(
                "Migrated {} operator: {} files written",
                report.operator_type,
                report.written.len()
            );
            Ok(())
        }
        Commands::Generate {
            target: GenerateTarget::Openapi { api_dir, engine },
        } => {
            let options = OpenApiOptions::resolve(api_dir, engine, config.as_ref());
            let inspector = ProjectInspector::new(project_root);
            inspector.check_project_root()?;
            let repo = inspector
                .resolve_import_path(config.as_ref().and_then(|c| c.repo.as_deref()))?;
            info!(engine = %options.engine, api_dir = %options.api_dir.display(), "Generating OpenAPI definitions");

            let ctx = ProjectContext::new(repo, project_root);
            let engine = ExternalEngine::new(options.engine, project_root);
            let generated = OpenApiGenerator::new(ctx, engine).generate(&options.api_dir)?;
            println!("Generated OpenAPI definitions for {} packages", generated.len());
            Ok(())
        }
    }
}
