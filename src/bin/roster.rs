//! Student roster command-line shell.
//!
//! Loads the roster file, then runs either the `-c` command list
//! (separated by `;` outside double quotes) or commands read line by line
//! from stdin.

use std::io::{self, BufRead};

use clap::Parser;
use student_roster::config::Args;
use student_roster::shell::{run_session, split_commands};
use student_roster::{JsonFileStore, LoadOutcome, RosterConfig, StudentRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = RosterConfig::from(&args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&config, args.command.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &RosterConfig, command: Option<&str>) -> io::Result<()> {
    let mut repo = StudentRepository::bind(JsonFileStore::new(&config.data_path));
    if let LoadOutcome::Reset { reason } = repo.load() {
        eprintln!(
            "warning: {} could not be read ({}), starting with an empty roster",
            config.data_path.display(),
            reason
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Some(script) => {
            let lines = split_commands(script).into_iter().map(Ok);
            run_session(&mut repo, lines, &mut out)
        }
        None => run_session(&mut repo, io::stdin().lock().lines(), &mut out),
    }
}
