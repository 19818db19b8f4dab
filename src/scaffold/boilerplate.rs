use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// License header read from a user-supplied file.
///
/// Loaded once at the start of a run and applied unchanged to every
/// header-supporting template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateHeader {
    source: PathBuf,
    text: String,
}

impl BoilerplateHeader {
    /// Read the header from `path`.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::HeaderLoadFailed`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            ScaffoldError::HeaderLoadFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded boilerplate header");
        Ok(Self {
            source: path.to_path_buf(),
            text,
        })
    }

    /// Build a header from text already in memory.
    pub fn from_text(source: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// File the header was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Header text exactly as read.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `body` with the header and a blank line in front of it.
    pub fn prepend_to(&self, body: &str) -> String {
        let header = self.text.trim_end();
        if header.is_empty() {
            return body.to_string();
        }
        format!("{header}\n\n{body}")
    }
}

/// Load the header named by `path`, if any.
///
/// An absent or empty path means "no header" and is not an error.
pub fn load_header(path: Option<&Path>) -> Result<Option<BoilerplateHeader>> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => BoilerplateHeader::load(p).map(Some),
        _ => Ok(None),
    }
}
