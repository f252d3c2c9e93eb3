//! Error types for the online banking system
//!
//! This module defines every error a ledger operation or a frontend can report.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Unknown user, unknown account, invalid transfer accounts
//! - **Balance Errors**: Insufficient funds, arithmetic overflow
//! - **Validation Errors**: Malformed or non-positive amounts, self transfers, full users
//! - **Input Errors**: I/O failures, malformed script rows

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking system
///
/// All domain variants are recoverable: the frontend reports them and
/// carries on. Only `IoError` raised by the frontend itself ends a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    /// No user registered under the given username
    #[error("User not found: {username}")]
    UserNotFound {
        /// The username that was looked up
        username: String,
    },

    /// The user exists but owns no account with the given number
    #[error("Account not found: {account_number} (user {username})")]
    AccountNotFound {
        /// Owner that was searched
        username: String,
        /// The account number that was looked up
        account_number: String,
    },

    /// One or both accounts of a transfer could not be resolved
    #[error("Invalid account details: {source_account} -> {destination}")]
    InvalidAccountDetails {
        /// Source account number as supplied
        source_account: String,
        /// Destination account number as supplied
        destination: String,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account balance is left unchanged, but a failure record is
    /// appended to its history.
    #[error(
        "Insufficient funds in account {account_number}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account that was debited
        account_number: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The user already holds the maximum number of accounts
    #[error("Maximum number of accounts reached for user {username} (capacity {capacity})")]
    AccountCapacityExceeded {
        /// Owner of the full account collection
        username: String,
        /// Configured per-user capacity
        capacity: usize,
    },

    /// Amount could not be parsed or is not strictly positive
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The rejected input, as typed
        input: String,
    },

    /// Source and destination of a transfer are the same account
    #[error("Cannot transfer from account {account_number} to itself")]
    SelfTransfer {
        /// The account named on both sides
        account_number: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected before any state changes.
    #[error("Arithmetic overflow in {operation} for account {account_number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account affected
        account_number: String,
    },

    /// Unknown script operation
    #[error("Invalid command '{op}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// The operation string as read
        op: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A script row is missing a field its operation requires
    #[error("{op} command at line {line} requires '{field}'")]
    MissingField {
        /// Operation of the offending row
        op: String,
        /// Name of the missing column
        field: String,
        /// Line number of the row
        line: u64,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred in a script file
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankingError {
    fn from(error: std::io::Error) -> Self {
        BankingError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankingError {
    /// Create a UserNotFound error
    pub fn user_not_found(username: &str) -> Self {
        BankingError::UserNotFound {
            username: username.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(username: &str, account_number: &str) -> Self {
        BankingError::AccountNotFound {
            username: username.to_string(),
            account_number: account_number.to_string(),
        }
    }

    /// Create an InvalidAccountDetails error
    pub fn invalid_account_details(source: &str, destination: &str) -> Self {
        BankingError::InvalidAccountDetails {
            source_account: source.to_string(),
            destination: destination.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account_number: &str, balance: Decimal, requested: Decimal) -> Self {
        BankingError::InsufficientFunds {
            account_number: account_number.to_string(),
            balance,
            requested,
        }
    }

    /// Create an AccountCapacityExceeded error
    pub fn capacity_exceeded(username: &str, capacity: usize) -> Self {
        BankingError::AccountCapacityExceeded {
            username: username.to_string(),
            capacity,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: impl ToString) -> Self {
        BankingError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(account_number: &str) -> Self {
        BankingError::SelfTransfer {
            account_number: account_number.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_number: &str) -> Self {
        BankingError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_number: account_number.to_string(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(op: &str, line: Option<u64>) -> Self {
        BankingError::InvalidCommand {
            op: op.to_string(),
            line,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(op: &str, field: &str, line: u64) -> Self {
        BankingError::MissingField {
            op: op.to_string(),
            field: field.to_string(),
            line,
        }
    }
}
