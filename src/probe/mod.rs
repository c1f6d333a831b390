//! Probe drivers: sources of raw per-run report text.
//!
//! A driver either runs the external probe tool several times or reads
//! previously captured reports from a directory. Either way the parser
//! receives plain text, one report per run.

pub mod captured;
pub mod live;

pub use captured::CapturedRuns;
pub use live::{LiveProbe, ProbeCommand};

use crate::utils::config::raw_run_file_name;
use crate::utils::error::ProbeError;
use log::info;
use std::path::Path;

/// Raw text of one probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRun {
    /// Run number or source file name
    pub label: String,
    pub text: String,
}

/// Something that can produce the raw reports of zero or more runs
pub trait RunSource {
    /// Collect every run, in the order the aggregate should consume them.
    ///
    /// Individual failed runs are skipped, not returned as errors.
    fn collect_runs(&self) -> Result<Vec<RawRun>, ProbeError>;
}

/// Save raw runs as `run_001.txt`, `run_002.txt`, ... so they can be
/// replayed later with [`CapturedRuns`]
pub fn archive_runs(runs: &[RawRun], dir: &Path) -> Result<(), ProbeError> {
    std::fs::create_dir_all(dir)?;

    for (index, run) in runs.iter().enumerate() {
        let path = dir.join(raw_run_file_name(index + 1));
        std::fs::write(&path, &run.text)?;
    }

    info!("Archived {} raw runs to {}", runs.len(), dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archived_runs_replay_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let runs: Vec<RawRun> = (1..=12)
            .map(|n| RawRun {
                label: format!("run {}", n),
                text: format!(" 1  10.0.0.{}  1.0 ms\n", n),
            })
            .collect();

        archive_runs(&runs, dir.path()).unwrap();
        let replayed = CapturedRuns::new(dir.path()).collect_runs().unwrap();

        let texts: Vec<&str> = replayed.iter().map(|r| r.text.as_str()).collect();
        let expected: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, expected);
        assert_eq!(replayed[0].label, "run_001.txt");
    }
}
