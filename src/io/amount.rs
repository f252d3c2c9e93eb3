//! Decimal amount parsing for user-supplied text

use crate::types::BankingError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal amount typed by a user or read from a script
///
/// Surrounding whitespace is ignored. Sign is not checked here: initial
/// balances may be negative, and the ledger validates operation amounts.
///
/// # Errors
///
/// Returns `InvalidAmount` for empty or non-numeric input.
pub fn parse_amount(input: &str) -> Result<Decimal, BankingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BankingError::invalid_amount(trimmed));
    }

    Decimal::from_str(trimmed).map_err(|_| BankingError::invalid_amount(trimmed))
}
