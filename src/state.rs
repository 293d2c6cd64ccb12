use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

/// A plain-text file holding a single value, such as the rotation index or
/// the id of the last posted challenge.
#[derive(Debug, Clone)]
pub struct ValueFile {
    path: PathBuf,
}

impl ValueFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The trimmed contents, or `None` when the file is absent, unreadable
    /// or blank.
    pub fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let value = text.trim();
                (!value.is_empty()).then(|| value.to_string())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn write(&self, value: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, format!("{value}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn absent_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ValueFile::new(dir.path().join("id.txt")).read(), None);
    }

    #[test]
    fn write_then_read_trims() {
        let dir = TempDir::new().unwrap();
        let file = ValueFile::new(dir.path().join("nested").join("id.txt"));

        file.write("1234567890").unwrap();
        assert_eq!(file.read().as_deref(), Some("1234567890"));

        file.write("  ").unwrap();
        assert_eq!(file.read(), None);
    }
}
