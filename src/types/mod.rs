//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state, history entries and snapshots
//! - `user`: Account owners
//! - `transfer`: Global transfer log records
//! - `command`: State-changing ledger requests
//! - `error`: Error types for the banking system

pub mod account;
pub mod command;
pub mod error;
pub mod transfer;
pub mod user;

pub use account::{Account, AccountEvent, AccountNumber, AccountSnapshot, AccountSummary};
pub use command::Command;
pub use error::BankingError;
pub use transfer::TransferRecord;
pub use user::{User, Username, DEFAULT_MAX_ACCOUNTS};
