//! # Error Module
//!
//! Domain errors for account operations, built with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by [`crate::Account`] operations.
///
/// The `Display` text is the exact message shown to the account holder.
/// Amounts are kept on the variants for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Incorrect PIN")]
    InvalidPin,

    #[error("Amount must be greater than zero")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient balance")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// Deposit would push the balance past `Decimal::MAX`
    #[error("Amount exceeds the maximum balance")]
    BalanceOverflow { amount: Decimal, balance: Decimal },
}

/// Result type alias with AccountError
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Create invalid amount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Create insufficient balance error
    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    /// Create balance overflow error
    pub fn balance_overflow(amount: Decimal, balance: Decimal) -> Self {
        Self::BalanceOverflow { amount, balance }
    }

    /// Entered PIN did not match
    pub fn is_invalid_pin(&self) -> bool {
        matches!(self, AccountError::InvalidPin)
    }

    /// Amount rejected before touching the balance
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, AccountError::InvalidAmount { .. })
    }

    /// Withdrawal larger than the balance
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, AccountError::InsufficientBalance { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        assert_eq!(AccountError::InvalidPin.to_string(), "Incorrect PIN");
        assert_eq!(
            AccountError::invalid_amount(dec!(-5)).to_string(),
            "Amount must be greater than zero"
        );
        assert_eq!(
            AccountError::insufficient_balance(dec!(6000), dec!(5200)).to_string(),
            "Insufficient balance"
        );
    }

    #[test]
    fn test_error_checks() {
        assert!(AccountError::InvalidPin.is_invalid_pin());
        assert!(AccountError::invalid_amount(dec!(0)).is_invalid_amount());

        let err = AccountError::insufficient_balance(dec!(100), dec!(50));
        assert!(err.is_insufficient_balance());
        assert!(!err.is_invalid_amount());
    }

    #[test]
    fn test_balance_overflow_display() {
        let err = AccountError::balance_overflow(Decimal::MAX, dec!(5000));
        assert_eq!(err.to_string(), "Amount exceeds the maximum balance");
        assert!(!err.is_invalid_amount());
        assert!(!err.is_invalid_pin());
    }
}
