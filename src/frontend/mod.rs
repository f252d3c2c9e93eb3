//! Presentation frontends
//!
//! A frontend turns some form of input into ledger calls and renders the
//! results. The ledger never touches the console; frontends can be swapped
//! without changing the core.

use crate::core::Ledger;
use crate::types::BankingError;
use std::io::Write;
use std::path::PathBuf;

pub mod interactive;
pub mod script;

pub use interactive::{InteractiveShell, MenuChoice};
pub use script::ScriptFrontend;

/// A presentation shell driving a ledger
pub trait Frontend {
    /// Run the session to completion against `ledger`, writing to `output`
    ///
    /// # Errors
    ///
    /// Only fatal errors are returned (input cannot be read, output cannot be
    /// written). Errors from individual requests are rendered or logged and
    /// the session continues.
    fn run(&mut self, ledger: &mut Ledger, output: &mut dyn Write) -> Result<(), BankingError>;
}

/// Which frontend to run and its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendKind {
    /// Menu loop on stdin
    Interactive,
    /// Replay of a CSV command file
    Script(PathBuf),
}

/// Create the frontend selected on the command line
pub fn create_frontend(kind: FrontendKind) -> Box<dyn Frontend> {
    match kind {
        FrontendKind::Interactive => Box::new(InteractiveShell::new(std::io::stdin().lock())),
        FrontendKind::Script(path) => Box::new(ScriptFrontend::new(path)),
    }
}
