use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{AppError, PAGE_LIST_VARIABLE, page_list};

/// The generated build config holding the page-list declaration.
#[derive(Debug, Clone)]
pub struct BuildConfigFile {
    path: PathBuf,
    variable: &'static str,
}

impl BuildConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), variable: PAGE_LIST_VARIABLE }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pages currently declared, in file order.
    pub fn registered_pages(&self) -> Result<Vec<String>, AppError> {
        let content = fs::read_to_string(&self.path)?;
        page_list::registered_entries(&content, self.variable).ok_or_else(|| self.malformed())
    }

    /// Append `page` to the declaration and rewrite the file.
    ///
    /// Fails with `MalformedConfig` without touching the file when the
    /// declaration line is missing.
    pub fn append_page(&self, page: &str) -> Result<(), AppError> {
        let content = fs::read_to_string(&self.path)?;
        let updated = page_list::append_entry(&content, self.variable, page)
            .ok_or_else(|| self.malformed())?;
        self.write_atomic(&updated)
    }

    /// Write through a temp file renamed over the original.
    ///
    /// Symlinks are resolved first so the link survives and its target is
    /// the file replaced.
    fn write_atomic(&self, content: &str) -> Result<(), AppError> {
        let target = fs::canonicalize(&self.path)?;
        let dir = target.parent().unwrap_or(Path::new("/"));
        let permissions = fs::metadata(&target)?.permissions();

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.persist(&target).map_err(|err| AppError::Io(err.error))?;
        Ok(())
    }

    fn malformed(&self) -> AppError {
        AppError::MalformedConfig {
            path: self.path.display().to_string(),
            variable: self.variable.to_string(),
        }
    }
}
