//! Pre-captured mode: replay probe reports saved as text files.

use super::{RawRun, RunSource};
use crate::utils::error::ProbeError;
use log::{debug, info, warn};
use std::path::PathBuf;

/// Every regular file in `dir` is one run, consumed in file name order
#[derive(Debug, Clone)]
pub struct CapturedRuns {
    pub dir: PathBuf,
}

impl CapturedRuns {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Regular files of the directory, sorted lexicographically by name
    pub fn list_files(&self) -> Result<Vec<PathBuf>, ProbeError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| ProbeError::CaptureDir {
            path: self.dir.display().to_string(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        // read_dir order is platform dependent; host selection needs a stable run order
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl RunSource for CapturedRuns {
    fn collect_runs(&self) -> Result<Vec<RawRun>, ProbeError> {
        let files = self.list_files()?;
        debug!("Found {} capture files in {}", files.len(), self.dir.display());

        let runs: Vec<RawRun> = files
            .iter()
            .filter_map(|path| match std::fs::read(path) {
                Ok(bytes) => Some(RawRun {
                    label: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string()),
                    text: String::from_utf8_lossy(&bytes).into_owned(),
                }),
                Err(e) => {
                    warn!("Skipping unreadable capture {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        info!("Loaded {} captured runs from {}", runs.len(), self.dir.display());
        Ok(runs)
    }
}
