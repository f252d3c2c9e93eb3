//! Online Banking CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --max-accounts 3
//! cargo run -- --mode script --input commands.csv > accounts.csv
//! RUST_LOG=online_banking=debug cargo run
//! ```
//!
//! Interactive mode prints a menu on stdout and reads choices from stdin.
//! Script mode replays a CSV command file and writes the final account
//! summary to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script file not readable, output not writable, etc.)

use online_banking::cli;
use online_banking::{create_frontend, Ledger};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level.as_str().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut ledger = Ledger::new(args.to_ledger_config());
    let mut frontend = create_frontend(args.frontend_kind());

    let mut output = std::io::stdout();
    if let Err(e) = frontend.run(&mut ledger, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
