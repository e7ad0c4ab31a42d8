//! # Account Module
//!
//! The single bank account an ATM session works against.
//! PIN and balance are private; the balance only moves through
//! [`Account::deposit`] and [`Account::withdraw`].

use crate::error::{AccountError, AccountResult};
use crate::pin::Pin;
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier (101, 102, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Wrap a raw account number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Raw account number
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bank account with a holder, a PIN and a non-negative balance.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    pin: Pin,
    balance: Decimal,
}

impl Account {
    /// Sample account number used when nothing is configured
    pub const SAMPLE_NUMBER: u32 = 101;
    /// Sample account holder
    pub const SAMPLE_HOLDER: &'static str = "Charlie";
    /// Sample PIN
    pub const SAMPLE_PIN: u32 = 1234;
    /// Sample opening balance
    pub const SAMPLE_BALANCE: i64 = 5000;

    /// Open an account.
    ///
    /// # Errors
    /// `InvalidAmount` if `opening_balance` is negative.
    pub fn new(
        number: AccountNumber,
        holder: impl Into<String>,
        pin: Pin,
        opening_balance: Decimal,
    ) -> AccountResult<Self> {
        if opening_balance < Decimal::ZERO {
            return Err(AccountError::invalid_amount(opening_balance));
        }

        Ok(Self {
            number,
            holder: holder.into(),
            pin,
            balance: opening_balance,
        })
    }

    /// The built-in sample account: 101, Charlie, PIN 1234, balance 5000.
    pub fn sample() -> Self {
        Self {
            number: AccountNumber::new(Self::SAMPLE_NUMBER),
            holder: Self::SAMPLE_HOLDER.to_string(),
            pin: Pin::new(Self::SAMPLE_PIN),
            balance: Decimal::from(Self::SAMPLE_BALANCE),
        }
    }

    /// Account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Holder name
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// PIN for the prompt hint. Never compare against this directly, use
    /// [`Account::verify_pin`].
    pub fn pin_hint(&self) -> u32 {
        self.pin.reveal()
    }

    /// Check an entered PIN. No state changes either way.
    pub fn verify_pin(&self, entered: &Pin) -> AccountResult<()> {
        if *entered == self.pin {
            Ok(())
        } else {
            Err(AccountError::InvalidPin)
        }
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance and return the new balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount <= 0`
    /// - `BalanceOverflow` if the new balance would exceed `Decimal::MAX`
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        ensure_positive(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::balance_overflow(amount, self.balance))?;
        Ok(self.balance)
    }

    /// Take `amount` from the balance and return the new balance.
    ///
    /// Amount validity is checked before sufficiency, so a non-positive
    /// request reports `InvalidAmount` even on an empty account.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientBalance` if `amount > balance`
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(AccountError::insufficient_balance(amount, self.balance));
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

fn ensure_positive(amount: Decimal) -> AccountResult<()> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(AccountError::invalid_amount(amount))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} (holder: {})", self.number, self.holder)
    }
}
