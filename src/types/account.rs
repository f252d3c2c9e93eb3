//! Account-related types for the online banking system
//!
//! This module defines the Account structure, its append-only history of
//! `AccountEvent`s, and the read-only snapshots handed to frontends.

use super::error::BankingError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Account identifier, unique within a user
pub type AccountNumber = String;

/// A single entry in an account's transaction history
///
/// Entries are appended in the order the operations happened and are never
/// modified afterwards. `Display` renders the human-readable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    /// The account was opened with this balance
    Created { balance: Decimal },

    /// Funds were credited
    Deposited { amount: Decimal, balance: Decimal },

    /// Funds were debited
    Withdrew { amount: Decimal, balance: Decimal },

    /// A withdrawal was rejected because the balance was too low
    WithdrawalFailed { amount: Decimal },
}

impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEvent::Created { balance } => {
                write!(f, "Account created with balance: ${}", balance)
            }
            AccountEvent::Deposited { amount, balance } => {
                write!(f, "Deposited: ${} | New Balance: ${}", amount, balance)
            }
            AccountEvent::Withdrew { amount, balance } => {
                write!(f, "Withdrew: ${} | New Balance: ${}", amount, balance)
            }
            AccountEvent::WithdrawalFailed { amount } => {
                write!(f, "Failed Withdrawal: ${} | Insufficient funds", amount)
            }
        }
    }
}

/// A bank account owned by a single user
///
/// Holds the running balance and the full history of operations applied to
/// it. Fields are private so the history can only grow through `deposit` and
/// `withdraw`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    balance: Decimal,
    history: Vec<AccountEvent>,
}

impl Account {
    /// Open an account with the given number and initial balance
    ///
    /// Any initial balance is accepted, including negative values. The
    /// history starts with a single `Created` entry.
    pub fn new(account_number: impl Into<AccountNumber>, initial_balance: Decimal) -> Self {
        Account {
            account_number: account_number.into(),
            balance: initial_balance,
            history: vec![AccountEvent::Created {
                balance: initial_balance,
            }],
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Ordered, read-only view of every recorded operation
    pub fn history(&self) -> &[AccountEvent] {
        &self.history
    }

    /// Whether `amount` can be credited without overflowing the balance
    pub fn can_deposit(&self, amount: Decimal) -> bool {
        self.balance.checked_add(amount).is_some()
    }

    /// Credit funds to the account
    ///
    /// Increases the balance by `amount` and records a `Deposited` entry.
    /// The amount is not validated here; callers enforce their own policy.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the new balance is not representable.
    /// The account is left unchanged in that case.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankingError::arithmetic_overflow("deposit", &self.account_number))?;

        self.balance = new_balance;
        self.history.push(AccountEvent::Deposited {
            amount,
            balance: new_balance,
        });

        Ok(())
    }

    /// Debit funds from the account
    ///
    /// Succeeds when `balance >= amount`. On insufficient funds the balance
    /// is untouched but a `WithdrawalFailed` entry is still recorded.
    ///
    /// # Errors
    ///
    /// - `InsufficientFunds` if the balance is lower than `amount`
    /// - `ArithmeticOverflow` if the subtraction is not representable
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if self.balance < amount {
            self.history.push(AccountEvent::WithdrawalFailed { amount });
            return Err(BankingError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankingError::arithmetic_overflow("withdrawal", &self.account_number))?;

        self.balance = new_balance;
        self.history.push(AccountEvent::Withdrew {
            amount,
            balance: new_balance,
        });

        Ok(())
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number.clone(),
            balance: self.balance,
        }
    }
}

/// Point-in-time copy of an account's identity and balance
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub account_number: AccountNumber,
    pub balance: Decimal,
}

/// One row of the end-of-session account summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub username: String,
    pub account: AccountNumber,
    pub balance: Decimal,
    /// Number of history entries recorded for the account
    pub entries: usize,
}
