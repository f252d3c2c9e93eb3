//! Core business logic module
//!
//! This module contains the banking core:
//! - `config` - Ledger settings (per-user account capacity)
//! - `ledger` - Operation orchestration and transfer logic
//! - `user_registry` - User lookup and lazy registration
//! - `transfer_log` - Global log of completed transfers

pub mod config;
pub mod ledger;
pub mod transfer_log;
pub mod user_registry;

pub use config::LedgerConfig;
pub use ledger::Ledger;
pub use transfer_log::TransferLog;
pub use user_registry::UserRegistry;
