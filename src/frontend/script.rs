//! Script frontend
//!
//! Replays a CSV command file against the ledger, then writes the final
//! account summary as CSV. Row-level failures (malformed rows, rejected
//! operations) are logged and skipped; only failing to open the file or to
//! write the summary ends the run with an error.

use crate::core::Ledger;
use crate::frontend::Frontend;
use crate::io::csv_format::write_summary_csv;
use crate::io::script_reader::ScriptReader;
use crate::types::BankingError;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScriptFrontend {
    path: PathBuf,
}

impl ScriptFrontend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScriptFrontend { path: path.into() }
    }
}

impl Frontend for ScriptFrontend {
    fn run(&mut self, ledger: &mut Ledger, output: &mut dyn Write) -> Result<(), BankingError> {
        let reader = ScriptReader::new(&self.path)?;

        let mut applied = 0usize;
        let mut rejected = 0usize;
        for result in reader {
            match result {
                Ok(command) => {
                    let name = command.name();
                    match ledger.apply(command) {
                        Ok(()) => applied += 1,
                        Err(e) => {
                            rejected += 1;
                            tracing::warn!("{} command failed: {}", name, e);
                        }
                    }
                }
                Err(e) => {
                    rejected += 1;
                    tracing::warn!("Script parsing error: {}", e);
                }
            }
        }

        tracing::info!(
            applied,
            rejected,
            script = %self.path.display(),
            "script finished"
        );

        write_summary_csv(&ledger.account_summaries(), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_script_applies_commands_and_writes_summary() {
        let file = create_temp_csv(
            "op,username,account,destination,amount\n\
             create,alice,A1,,100.0\n\
             create,alice,A2,,0.0\n\
             transfer,alice,A1,A2,40\n",
        );
        let mut ledger = Ledger::default();
        let mut output = Vec::new();

        ScriptFrontend::new(file.path())
            .run(&mut ledger, &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "username,account,balance,entries\nalice,A1,60.0,2\nalice,A2,40.0,2\n"
        );
        assert_eq!(ledger.transfers().len(), 1);
    }

    #[test]
    fn test_script_continues_after_bad_rows() {
        let file = create_temp_csv(
            "op,username,account,destination,amount\n\
             create,alice,A1,,10\n\
             withdraw,alice,A1,,500\n\
             deposit,alice,A1,,oops\n\
             deposit,bob,B1,,1\n\
             deposit,alice,A1,,5\n",
        );
        let mut ledger = Ledger::default();
        let mut output = Vec::new();

        let result = ScriptFrontend::new(file.path()).run(&mut ledger, &mut output);

        assert!(result.is_ok());
        assert_eq!(
            ledger.view_account_details("alice", "A1").unwrap().balance,
            Decimal::new(15, 0)
        );
        // create, failed withdrawal, deposit
        assert_eq!(
            ledger.view_transaction_history("alice", "A1").unwrap().len(),
            3
        );
    }

    #[test]
    fn test_script_missing_file_is_fatal() {
        let mut ledger = Ledger::default();
        let mut output = Vec::new();

        let result = ScriptFrontend::new("does/not/exist.csv").run(&mut ledger, &mut output);

        assert!(matches!(result, Err(BankingError::IoError { .. })));
        assert!(output.is_empty());
    }
}
