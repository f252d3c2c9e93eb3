//! Transfer records kept in the ledger's global transfer log

use super::account::AccountNumber;
use super::user::Username;
use rust_decimal::Decimal;
use std::fmt;

/// A completed transfer between two accounts of the same user
///
/// Only successful transfers produce a record. `Display` renders the
/// human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    /// Owner of both accounts
    pub username: Username,

    /// Account that was debited
    pub source: AccountNumber,

    /// Account that was credited
    pub destination: AccountNumber,

    /// Amount moved
    pub amount: Decimal,
}

impl fmt::Display for TransferRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transferred ${} from {} to {}",
            self.amount, self.source, self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_log_format() {
        let record = TransferRecord {
            username: "alice".to_string(),
            source: "A1".to_string(),
            destination: "A2".to_string(),
            amount: Decimal::new(1500, 1),
        };

        assert_eq!(record.to_string(), "Transferred $150.0 from A1 to A2");
    }
}
