//! Append-only NDJSON dataset file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Entry;
use crate::error::Error;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATAFILE: &str = "./data.ndjson";

/// The dataset file entries are appended to.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line, returning the line written.
    ///
    /// The file is created if missing; its directory is not.
    pub fn append(&self, entry: &Entry) -> Result<String, Error> {
        let line = entry.to_ndjson()?;
        self.append_line(&line)?;
        Ok(line)
    }

    fn append_line(&self, line: &str) -> Result<(), Error> {
        let io_err = |source: std::io::Error| Error::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        // One write call, so the line lands in one piece
        file.write_all(line.as_bytes()).map_err(io_err)?;

        debug!(path = %self.path.display(), bytes = line.len(), "appended entry");
        Ok(())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(DEFAULT_DATAFILE)
    }
}
