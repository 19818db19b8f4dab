use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::boilerplate::BoilerplateHeader;
use super::registry::TemplateSpec;
use crate::error::{Result, ScaffoldError};
use crate::project::ProjectContext;

/// Writes templates into the project tree, one at a time and in order.
///
/// Output files are overwritten. The first failure stops the run and files
/// written before it stay on disk.
#[derive(Debug)]
pub struct Scaffold<'a> {
    ctx: &'a ProjectContext,
    header: Option<BoilerplateHeader>,
}

impl<'a> Scaffold<'a> {
    pub fn new(ctx: &'a ProjectContext) -> Self {
        Self { ctx, header: None }
    }

    /// Apply `header` to every header-supporting template executed afterwards.
    pub fn with_header(mut self, header: Option<BoilerplateHeader>) -> Self {
        self.header = header;
        self
    }

    pub fn header(&self) -> Option<&BoilerplateHeader> {
        self.header.as_ref()
    }

    /// Final file content for `template`, header included.
    pub fn render(&self, template: &TemplateSpec) -> Result<String> {
        let path = self.ctx.join(template.path());
        let mut body = template
            .render(self.ctx, self.header.as_ref())
            .map_err(|e| ScaffoldError::template_write(template.name(), &path, e))?;

        if matches!(template, TemplateSpec::Boilerplate) {
            return Ok(body);
        }
        if !body.ends_with('\n') {
            body.push('\n');
        }
        match &self.header {
            Some(header) if template.supports_header() => Ok(header.prepend_to(&body)),
            _ => Ok(body),
        }
    }

    /// Execute `templates` in order, returning the paths written.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::TemplateWriteFailed`] naming the first template that
    /// could not be rendered or written.
    pub fn execute(&self, templates: &[TemplateSpec]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(templates.len());
        for template in templates {
            let content = self.render(template)?;
            let path = self.ctx.join(template.path());
            write_file(&path, &content, template.is_executable())
                .map_err(|e| ScaffoldError::template_write(template.name(), &path, e))?;
            info!(template = template.name(), path = %template.path(), "Created file");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_file(path: &Path, content: &str, executable: bool) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    if executable {
        set_executable(path)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
