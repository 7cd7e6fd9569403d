use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One-line status file holding the current elapsed minutes, overwritten
/// whenever the minute changes.
#[derive(Debug, Clone)]
pub struct MinuteFile {
    path: PathBuf,
}

impl MinuteFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn write(&self, elapsed_min: i64) -> io::Result<()> {
        fs::write(&self.path, elapsed_min.to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
