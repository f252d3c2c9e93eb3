//! Ledger requests
//!
//! A `Command` is one state-changing request against the ledger. Frontends
//! that replay input in bulk convert each row into a `Command` and hand it to
//! `Ledger::apply`.

use super::account::AccountNumber;
use super::user::Username;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open an account, registering the user on first use
    CreateAccount {
        username: Username,
        account_number: AccountNumber,
        initial_balance: Decimal,
    },

    /// Credit funds to an existing account
    Deposit {
        username: Username,
        account_number: AccountNumber,
        amount: Decimal,
    },

    /// Debit funds from an existing account
    Withdraw {
        username: Username,
        account_number: AccountNumber,
        amount: Decimal,
    },

    /// Move funds between two accounts of the same user
    Transfer {
        username: Username,
        source: AccountNumber,
        destination: AccountNumber,
        amount: Decimal,
    },
}

impl Command {
    /// Short lowercase name, as used in script files and logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateAccount { .. } => "create",
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Transfer { .. } => "transfer",
        }
    }
}
