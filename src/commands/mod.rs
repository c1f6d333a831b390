//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod trace;
pub mod utils;

// Re-export main command functions
pub use models::{OutputOptions, ReplayArgs, TraceArgs};
pub use trace::{
    build_report, execute_replay, execute_trace, parse_delay, validate_args, validate_replay_args,
};
pub use utils::{display_schema, display_version, validate_report_file};
