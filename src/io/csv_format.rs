//! CSV format handling for script commands and account summaries
//!
//! This module centralizes all CSV format concerns, providing:
//! - CommandRecord structure for deserialization
//! - Conversion from script rows to ledger commands
//! - Account summary serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::io::amount::parse_amount;
use crate::types::{AccountSummary, BankingError, Command};
use csv::WriterBuilder;
use serde::Deserialize;
use std::io::Write;

/// Header row of the account summary output
pub const SUMMARY_HEADER: [&str; 4] = ["username", "account", "balance", "entries"];

/// CSV record structure for deserialization
///
/// Matches the script format with columns: op, username, account, destination, amount.
/// `destination` is only used by transfers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandRecord {
    pub op: String,
    pub username: String,
    pub account: String,
    pub destination: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CommandRecord to a Command
///
/// This function:
/// - Parses the operation name (case-insensitive)
/// - Parses the amount into a Decimal
/// - Validates that every field the operation needs is present
///
/// # Arguments
///
/// * `record` - The deserialized CSV row
/// * `line` - Line number of the row, for error messages
///
/// # Errors
///
/// - `InvalidCommand` for an unknown operation
/// - `MissingField` if `amount` or `destination` is absent or blank
/// - `InvalidAmount` if the amount is not a number
pub fn convert_command_record(record: CommandRecord, line: u64) -> Result<Command, BankingError> {
    let op = record.op.to_lowercase();

    let required = |field: &str, value: Option<String>| -> Result<String, BankingError> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BankingError::missing_field(&op, field, line))
    };

    let command = match op.as_str() {
        "create" => Command::CreateAccount {
            initial_balance: parse_amount(&required("amount", record.amount)?)?,
            username: record.username,
            account_number: record.account,
        },
        "deposit" => Command::Deposit {
            amount: parse_amount(&required("amount", record.amount)?)?,
            username: record.username,
            account_number: record.account,
        },
        "withdraw" => Command::Withdraw {
            amount: parse_amount(&required("amount", record.amount)?)?,
            username: record.username,
            account_number: record.account,
        },
        "transfer" => Command::Transfer {
            destination: required("destination", record.destination)?,
            amount: parse_amount(&required("amount", record.amount)?)?,
            username: record.username,
            source: record.account,
        },
        _ => return Err(BankingError::invalid_command(&record.op, Some(line))),
    };

    Ok(command)
}

/// Write account summaries to CSV format
///
/// Writes one row per account with columns: username, account, balance, entries.
/// Rows keep the order given, which is the ledger's insertion order.
///
/// # Errors
///
/// Returns `IoError` or `ParseError` if the writer fails.
pub fn write_summary_csv(
    summaries: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankingError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(SUMMARY_HEADER)?;
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    Ok(())
}
