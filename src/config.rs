//! Roster configuration.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_PATH: &str = "students.json";
pub const DEFAULT_LOG_FILTER: &str = "student_roster=info";

/// Student roster command line arguments.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(version, about = "Manage a student roster stored in a JSON file")]
pub struct Args {
    /// JSON file holding the roster.
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Log filter directive (overridden by RUST_LOG).
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log: String,

    /// Execute a single command and exit.
    #[arg(short = 'c', long)]
    pub command: Option<String>,
}

/// Roster configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// File the repository is bound to.
    pub data_path: PathBuf,
    /// Default tracing filter directive.
    pub log_filter: String,
}

impl From<&Args> for RosterConfig {
    fn from(args: &Args) -> Self {
        Self {
            data_path: args.data.clone(),
            log_filter: args.log.clone(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
