//! Live probing through an external traceroute-style program.

use super::{RawRun, RunSource};
use crate::utils::config::DEFAULT_PROBE_PROGRAM;
use crate::utils::error::ProbeError;
use log::{debug, info, warn};
use std::process::Command;
use std::time::Duration;

/// External program invocation: `<program> [args...] <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ProbeCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROBE_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

impl ProbeCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Human-readable command line for logs
    pub fn display(&self, target: &str) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(target);
        parts.join(" ")
    }
}

/// Runs the probe program `runs` times against one target, sequentially
#[derive(Debug, Clone)]
pub struct LiveProbe {
    pub command: ProbeCommand,
    pub target: String,
    pub runs: usize,

    /// Pause between runs; not applied after the last run
    pub delay: Duration,
}

impl LiveProbe {
    pub fn new(command: ProbeCommand, target: impl Into<String>, runs: usize, delay: Duration) -> Self {
        Self {
            command,
            target: target.into(),
            runs,
            delay,
        }
    }

    /// Execute one run, returning its stdout
    ///
    /// **Private** - failures are reported to the caller as None
    fn run_once(&self, run_number: usize) -> Option<String> {
        debug!("Run {}: {}", run_number, self.command.display(&self.target));

        let output = match Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(&self.target)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Run {}: failed to start '{}': {}", run_number, self.command.program, e);
                return None;
            }
        };

        if !output.status.success() {
            warn!(
                "Run {}: probe exited with {}: {}",
                run_number,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl RunSource for LiveProbe {
    fn collect_runs(&self) -> Result<Vec<RawRun>, ProbeError> {
        if self.command.program.trim().is_empty() {
            return Err(ProbeError::InvalidCommand("probe program is empty".to_string()));
        }

        let mut collected = Vec::with_capacity(self.runs);

        for run_number in 1..=self.runs {
            info!("Probe run {}/{} to {}", run_number, self.runs, self.target);

            if let Some(text) = self.run_once(run_number) {
                collected.push(RawRun {
                    label: format!("run {}", run_number),
                    text,
                });
            }

            if run_number < self.runs && !self.delay.is_zero() {
                debug!("Waiting {:.1}s before next run", self.delay.as_secs_f64());
                std::thread::sleep(self.delay);
            }
        }

        info!("{} of {} probe runs succeeded", collected.len(), self.runs);
        Ok(collected)
    }
}
