//! User type: an owner of a bounded, ordered collection of accounts

use super::account::Account;
use super::error::BankingError;

/// User identifier, unique across the ledger
pub type Username = String;

/// Number of accounts a user may hold unless configured otherwise
pub const DEFAULT_MAX_ACCOUNTS: usize = 10;

/// A bank customer and the accounts they own
///
/// Accounts are kept in insertion order. Account numbers are not required to
/// be unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    username: Username,
    accounts: Vec<Account>,
    max_accounts: usize,
}

impl User {
    pub fn new(username: impl Into<Username>, max_accounts: usize) -> Self {
        User {
            username: username.into(),
            accounts: Vec::new(),
            max_accounts,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn max_accounts(&self) -> usize {
        self.max_accounts
    }

    /// Attach an account if the user still has room for it
    ///
    /// # Errors
    ///
    /// Returns `AccountCapacityExceeded` when the user already holds
    /// `max_accounts` accounts. The rejected account is dropped.
    pub fn add_account(&mut self, account: Account) -> Result<(), BankingError> {
        if self.accounts.len() >= self.max_accounts {
            return Err(BankingError::capacity_exceeded(
                &self.username,
                self.max_accounts,
            ));
        }

        self.accounts.push(account);
        Ok(())
    }

    /// First account whose number matches exactly
    pub fn get_account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
    }

    pub fn get_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number() == account_number)
    }

    /// Index of the first matching account, used for split borrows
    pub(crate) fn position(&self, account_number: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.account_number() == account_number)
    }

    /// Mutable access to two distinct accounts at once
    ///
    /// `first` and `second` must be different valid indices.
    pub(crate) fn pair_mut(&mut self, first: usize, second: usize) -> (&mut Account, &mut Account) {
        debug_assert_ne!(first, second);
        if first < second {
            let (head, tail) = self.accounts.split_at_mut(second);
            (&mut head[first], &mut tail[0])
        } else {
            let (head, tail) = self.accounts.split_at_mut(first);
            (&mut tail[0], &mut head[second])
        }
    }

    /// Read-only view of the accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
