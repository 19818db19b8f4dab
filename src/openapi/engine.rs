use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

/// Base name of the generated file in each API package.
pub const OUTPUT_FILE_BASE_NAME: &str = "zz_generated.openapi";

/// Arguments for one generator invocation.
///
/// Every API package gets its own value; nothing is shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationArgs {
    /// Package directories to read, relative to the project root (`./pkg/apis/<g>/<v>`)
    pub input_dirs: Vec<String>,
    /// Output base; empty so output lands at `output_package_path`
    pub output_base: String,
    /// Output file name without extension
    pub output_file_base_name: String,
    /// Absolute directory the generated file is written to
    pub output_package_path: PathBuf,
    /// License header for the generated file
    pub go_header_file_path: PathBuf,
    /// API rule violation report; `-` for stdout
    pub report_filename: String,
}

impl GenerationArgs {
    /// Arguments generating `input_dir` into `output_package_path`.
    pub fn new(input_dir: impl Into<String>, output_package_path: PathBuf, header_file: &Path) -> Self {
        Self {
            input_dirs: vec![input_dir.into()],
            output_base: String::new(),
            output_file_base_name: OUTPUT_FILE_BASE_NAME.to_string(),
            output_package_path,
            go_header_file_path: header_file.to_path_buf(),
            report_filename: "-".to_string(),
        }
    }

    /// Reject argument sets the generator would fail on.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.input_dirs.is_empty() || self.input_dirs.iter().any(String::is_empty) {
            anyhow::bail!("input directory cannot be empty");
        }
        if self.output_file_base_name.is_empty() {
            anyhow::bail!("output file base name cannot be empty");
        }
        if self.output_package_path.as_os_str().is_empty() {
            anyhow::bail!("output package cannot be empty");
        }
        Ok(())
    }

    /// Command-line form understood by `openapi-gen`.
    pub fn to_cli_args(&self) -> Vec<String> {
        vec![
            format!("--input-dirs={}", self.input_dirs.join(",")),
            format!("--output-base={}", self.output_base),
            format!("--output-file-base={}", self.output_file_base_name),
            format!("--output-package={}", self.output_package_path.display()),
            format!("--go-header-file={}", self.go_header_file_path.display()),
            format!("--report-filename={}", self.report_filename),
        ]
    }
}

/// The code generator producing OpenAPI definitions for one package.
pub trait OpenApiEngine {
    /// Run one generation. Only success or failure is observed.
    fn generate(&self, args: &GenerationArgs) -> anyhow::Result<()>;
}

/// Runs an external `openapi-gen` binary.
#[derive(Debug, Clone)]
pub struct ExternalEngine {
    program: String,
    working_dir: PathBuf,
}

impl ExternalEngine {
    /// Run `program` from `working_dir` (the project root, so relative input
    /// dirs resolve).
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl OpenApiEngine for ExternalEngine {
    fn generate(&self, args: &GenerationArgs) -> anyhow::Result<()> {
        let cli_args = args.to_cli_args();
        debug!(program = %self.program, args = ?cli_args, "running openapi generator");
        let status = Command::new(&self.program)
            .args(&cli_args)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("failed to run {}", self.program))?;
        if !status.success() {
            anyhow::bail!("{} exited with {status}", self.program);
        }
        Ok(())
    }
}

impl<E: OpenApiEngine + ?Sized> OpenApiEngine for &E {
    fn generate(&self, args: &GenerationArgs) -> anyhow::Result<()> {
        (**self).generate(args)
    }
}
