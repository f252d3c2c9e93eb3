//! Ledger: the banking system core
//!
//! This module provides the Ledger that owns the user registry and the global
//! transfer log, and orchestrates every operation a frontend can request.
//!
//! The ledger enforces business rules such as:
//! - Two-stage resolution (user, then account) with distinct error kinds
//! - Strictly positive amounts for deposits, withdrawals and transfers
//! - All-or-nothing transfers between two accounts of the same user

use crate::core::config::LedgerConfig;
use crate::core::transfer_log::TransferLog;
use crate::core::user_registry::UserRegistry;
use crate::types::{
    Account, AccountEvent, AccountSnapshot, AccountSummary, BankingError, Command, TransferRecord,
    User,
};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// In-memory banking ledger
///
/// Single-threaded: every mutating operation takes `&mut self`, so callers
/// are serialized by the borrow checker.
pub struct Ledger {
    users: UserRegistry,
    transfers: TransferLog,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(config: LedgerConfig) -> Self {
        Ledger {
            users: UserRegistry::new(config.max_accounts_per_user),
            transfers: TransferLog::new(),
        }
    }

    /// Apply a single state-changing command
    ///
    /// Routes the command to the matching ledger operation.
    pub fn apply(&mut self, command: Command) -> Result<(), BankingError> {
        match command {
            Command::CreateAccount {
                username,
                account_number,
                initial_balance,
            } => self.create_account(&username, &account_number, initial_balance),
            Command::Deposit {
                username,
                account_number,
                amount,
            } => self.deposit(&username, &account_number, amount),
            Command::Withdraw {
                username,
                account_number,
                amount,
            } => self.withdraw(&username, &account_number, amount),
            Command::Transfer {
                username,
                source,
                destination,
                amount,
            } => self.transfer_funds(&username, &source, &destination, amount),
        }
    }

    /// Get or create the user with the given username
    pub fn find_or_create_user(&mut self, username: &str) -> &mut User {
        self.users.find_or_create(username)
    }

    /// Look up a user without creating it
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.find(username)
    }

    /// Open a new account for a user
    ///
    /// The user is registered on first use. Account numbers are not checked
    /// for uniqueness; a duplicate is stored and shadowed by the earlier one
    /// on lookup. The user stays registered even if the account is rejected.
    ///
    /// # Errors
    ///
    /// Returns `AccountCapacityExceeded` if the user's account collection is full.
    pub fn create_account(
        &mut self,
        username: &str,
        account_number: &str,
        initial_balance: Decimal,
    ) -> Result<(), BankingError> {
        let user = self.users.find_or_create(username);

        if let Err(e) = user.add_account(Account::new(account_number, initial_balance)) {
            tracing::warn!(username, account_number, "account rejected: {}", e);
            return Err(e);
        }

        tracing::info!(
            username,
            account_number,
            balance = %initial_balance,
            "account created"
        );
        Ok(())
    }

    /// Current number and balance of an account
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the username is unknown
    /// - `AccountNotFound` if the user has no such account
    pub fn view_account_details(
        &self,
        username: &str,
        account_number: &str,
    ) -> Result<AccountSnapshot, BankingError> {
        self.account(username, account_number)
            .map(Account::snapshot)
    }

    /// Full ordered history of an account
    ///
    /// # Errors
    ///
    /// Same resolution errors as `view_account_details`.
    pub fn view_transaction_history(
        &self,
        username: &str,
        account_number: &str,
    ) -> Result<&[AccountEvent], BankingError> {
        self.account(username, account_number)
            .map(Account::history)
    }

    /// Credit funds to an account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is not strictly positive
    /// - `UserNotFound` / `AccountNotFound` on resolution failure
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(
        &mut self,
        username: &str,
        account_number: &str,
        amount: Decimal,
    ) -> Result<(), BankingError> {
        validate_amount(amount)?;
        self.account_mut(username, account_number)?.deposit(amount)?;

        tracing::debug!(username, account_number, amount = %amount, "deposit applied");
        Ok(())
    }

    /// Debit funds from an account
    ///
    /// A rejected withdrawal for insufficient funds is still recorded in the
    /// account history.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is not strictly positive
    /// - `UserNotFound` / `AccountNotFound` on resolution failure
    /// - `InsufficientFunds` if the balance is lower than `amount`
    pub fn withdraw(
        &mut self,
        username: &str,
        account_number: &str,
        amount: Decimal,
    ) -> Result<(), BankingError> {
        validate_amount(amount)?;
        let account = self.account_mut(username, account_number)?;

        if let Err(e) = account.withdraw(amount) {
            tracing::warn!(username, account_number, "withdrawal rejected: {}", e);
            return Err(e);
        }

        tracing::debug!(username, account_number, amount = %amount, "withdrawal applied");
        Ok(())
    }

    /// Move funds between two accounts owned by the same user
    ///
    /// Either both the debit and the credit happen, or neither does. On
    /// success the source history gains a `Withdrew` entry, the destination
    /// history a `Deposited` entry, and the transfer log one record.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is not strictly positive
    /// - `UserNotFound` if the username is unknown
    /// - `InvalidAccountDetails` if either account is missing
    /// - `SelfTransfer` if both numbers resolve to the same account
    /// - `ArithmeticOverflow` if the destination balance would overflow
    /// - `InsufficientFunds` if the source balance is lower than `amount`;
    ///   the failed attempt is recorded in the source history only
    pub fn transfer_funds(
        &mut self,
        username: &str,
        source: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<(), BankingError> {
        validate_amount(amount)?;

        let user = self
            .users
            .find_mut(username)
            .ok_or_else(|| BankingError::user_not_found(username))?;

        let (source_index, destination_index) =
            match (user.position(source), user.position(destination)) {
                (Some(s), Some(d)) => (s, d),
                _ => {
                    tracing::warn!(username, source, destination, "transfer with unknown account");
                    return Err(BankingError::invalid_account_details(source, destination));
                }
            };

        if source_index == destination_index {
            return Err(BankingError::self_transfer(source));
        }

        let (source_account, destination_account) = user.pair_mut(source_index, destination_index);

        // The credit must not be able to fail once the debit went through
        if !destination_account.can_deposit(amount) {
            return Err(BankingError::arithmetic_overflow("transfer", destination));
        }

        if let Err(e) = source_account.withdraw(amount) {
            tracing::warn!(username, source, destination, "transfer rejected: {}", e);
            return Err(e);
        }
        destination_account.deposit(amount)?;

        self.transfers.record(TransferRecord {
            username: username.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            amount,
        });

        tracing::info!(username, source, destination, amount = %amount, "transfer completed");
        Ok(())
    }

    /// Global log of completed transfers, oldest first
    pub fn transfers(&self) -> &VecDeque<TransferRecord> {
        self.transfers.records()
    }

    /// All users in registration order
    pub fn users(&self) -> &[User] {
        self.users.users()
    }

    /// One summary row per account, users and accounts in insertion order
    pub fn account_summaries(&self) -> Vec<AccountSummary> {
        self.users
            .users()
            .iter()
            .flat_map(|user| {
                user.accounts().iter().map(move |account| AccountSummary {
                    username: user.username().to_string(),
                    account: account.account_number().to_string(),
                    balance: account.balance(),
                    entries: account.history().len(),
                })
            })
            .collect()
    }

    fn account(&self, username: &str, account_number: &str) -> Result<&Account, BankingError> {
        let user = self
            .users
            .find(username)
            .ok_or_else(|| BankingError::user_not_found(username))?;

        user.get_account(account_number)
            .ok_or_else(|| BankingError::account_not_found(username, account_number))
    }

    fn account_mut(
        &mut self,
        username: &str,
        account_number: &str,
    ) -> Result<&mut Account, BankingError> {
        let user = self
            .users
            .find_mut(username)
            .ok_or_else(|| BankingError::user_not_found(username))?;

        user.get_account_mut(account_number)
            .ok_or_else(|| BankingError::account_not_found(username, account_number))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

/// Reject zero and negative amounts
fn validate_amount(amount: Decimal) -> Result<(), BankingError> {
    if amount <= Decimal::ZERO {
        return Err(BankingError::invalid_amount(amount));
    }
    Ok(())
}
