//! # Status File
//!
//! The only durable artifact: a plain-text file holding the remaining time as
//! `MM:SS`, overwritten in full on every tick. External tools (status bars,
//! prompts) read it.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_STATUS_FILE: &str = "sprint.txt";

#[derive(Error, Debug)]
pub enum StatusFileError {
    #[error("could not write status file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct StatusFile {
    path: PathBuf,
}

impl StatusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and write `display` with no trailing newline.
    ///
    /// The handle is flushed and closed before returning.
    pub fn write(&self, display: &str) -> Result<(), StatusFileError> {
        let wrap = |source| StatusFileError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = File::create(&self.path).map_err(wrap)?;
        file.write_all(display.as_bytes()).map_err(wrap)?;
        file.flush().map_err(wrap)?;
        Ok(())
    }
}
