//! Online Banking Library
//! # Overview
//!
//! This library provides an in-memory banking system: users own accounts,
//! accounts keep a balance and an append-only history, and a ledger
//! orchestrates transfers between accounts of the same user.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, User, Command, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Operation orchestration and transfer logic
//!   - [`core::user_registry`] - User lookup and lazy registration
//!   - [`core::transfer_log`] - Global log of completed transfers
//! - [`io`] - Amount parsing, CSV scripts and summary output
//! - [`frontend`] - Interactive menu and script replay shells
//!
//! # Operations
//!
//! - **Create Account**: Open an account, registering the user on first use
//! - **Deposit / Withdraw**: Credit or debit a single account
//! - **Transfer**: Debit one account and credit another of the same user, all or nothing
//! - **View Details / History**: Read an account's balance or its full history
//!
//! # Invariants
//!
//! - `balance` equals the initial balance plus successful deposits minus successful withdrawals
//! - Histories only grow; a failed withdrawal appends a record but leaves the balance alone
//! - Every successful transfer adds exactly one record to the global transfer log

// Module declarations
pub mod cli;
pub mod core;
pub mod frontend;
pub mod io;
pub mod types;

pub use core::{Ledger, LedgerConfig};
pub use frontend::{create_frontend, Frontend, FrontendKind};
pub use types::{
    Account, AccountEvent, AccountSnapshot, AccountSummary, BankingError, Command, TransferRecord,
    User,
};
