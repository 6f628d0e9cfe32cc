use crate::error::ReportError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Sends one rendered report to the console and to the backup file.
pub struct ReportWriter<W: Write> {
    console: W,
    path: PathBuf,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(console: W, path: impl Into<PathBuf>) -> Self {
        Self {
            console,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `rendered` to the console, then replaces the backup file with
    /// the same bytes.
    ///
    /// The console is not rolled back if the file write fails. The file is
    /// written to a uniquely named temporary in the same directory and
    /// persisted over the target, so a failed write leaves any previous
    /// backup intact.
    pub fn emit(&mut self, rendered: &str) -> Result<(), ReportError> {
        self.console
            .write_all(rendered.as_bytes())
            .and_then(|()| self.console.flush())
            .map_err(ReportError::Console)?;

        self.write_file(rendered).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), bytes = rendered.len(), "Backup file written.");
        Ok(())
    }

    // The temporary is removed when dropped if `persist` is never reached.
    fn write_file(&self, rendered: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
