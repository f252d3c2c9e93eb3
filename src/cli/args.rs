use crate::core::LedgerConfig;
use crate::frontend::FrontendKind;
use crate::types::DEFAULT_MAX_ACCOUNTS;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// In-memory online banking system
#[derive(Parser, Debug)]
#[command(name = "online-banking")]
#[command(about = "In-memory online banking with an interactive menu", long_about = None)]
pub struct CliArgs {
    /// Frontend used to drive the ledger
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "interactive",
        help = "Frontend: 'interactive' menu on stdin or 'script' replay of a CSV file"
    )]
    pub mode: Mode,

    /// CSV command script (script mode only)
    #[arg(
        long = "input",
        value_name = "FILE",
        required_if_eq("mode", "script"),
        help = "Path to the CSV command script (required with --mode script)"
    )]
    pub input: Option<PathBuf>,

    /// Maximum number of accounts per user
    #[arg(
        long = "max-accounts",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_ACCOUNTS,
        help = "Maximum number of accounts a single user may hold"
    )]
    pub max_accounts: usize,

    /// Log filter directive, used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter (e.g. 'info' or 'online_banking=debug'); RUST_LOG takes precedence"
    )]
    pub log_level: String,
}

/// Available frontends
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Interactive,
    Script,
}

impl CliArgs {
    /// Build the ledger configuration from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig::new(self.max_accounts)
    }

    /// Select the frontend from CLI arguments
    ///
    /// clap guarantees `--input` is present in script mode.
    pub fn frontend_kind(&self) -> FrontendKind {
        match self.mode {
            Mode::Interactive => FrontendKind::Interactive,
            Mode::Script => FrontendKind::Script(self.input.clone().unwrap_or_default()),
        }
    }
}
