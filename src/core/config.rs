//! Ledger configuration

use crate::types::DEFAULT_MAX_ACCOUNTS;

/// Settings applied to every user the ledger registers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Maximum number of accounts a single user may hold
    pub max_accounts_per_user: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_accounts_per_user: DEFAULT_MAX_ACCOUNTS,
        }
    }
}

impl LedgerConfig {
    /// Create a LedgerConfig with a custom per-user capacity
    ///
    /// A capacity of zero would make every account creation fail, so it
    /// falls back to the default with a warning.
    pub fn new(max_accounts_per_user: usize) -> Self {
        let default = Self::default();

        let max_accounts_per_user = if max_accounts_per_user == 0 {
            tracing::warn!(
                "Invalid max_accounts_per_user ({}), using default ({})",
                max_accounts_per_user,
                default.max_accounts_per_user
            );
            default.max_accounts_per_user
        } else {
            max_accounts_per_user
        };

        Self {
            max_accounts_per_user,
        }
    }
}
