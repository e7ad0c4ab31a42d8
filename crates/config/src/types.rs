//! Configuration types

use atm_core::{Account, AccountNumber, AccountResult, Pin};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtmConfig {
    /// Account served by this terminal
    #[serde(default)]
    pub account: AccountConfig,

    /// Session behaviour
    #[serde(default)]
    pub session: SessionConfig,
}

impl AtmConfig {
    /// Build the account described by `[account]`
    pub fn build_account(&self) -> AccountResult<Account> {
        Account::new(
            AccountNumber::new(self.account.number),
            self.account.holder.clone(),
            Pin::new(self.account.pin),
            self.account.opening_balance,
        )
    }
}

/// Account configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account number
    #[serde(default = "default_number")]
    pub number: u32,

    /// Holder name
    #[serde(default = "default_holder")]
    pub holder: String,

    /// Numeric PIN
    #[serde(default = "default_pin")]
    pub pin: u32,

    /// Balance at session start, written as a string ("5000", "120.50")
    #[serde(default = "default_opening_balance")]
    pub opening_balance: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            number: default_number(),
            holder: default_holder(),
            pin: default_pin(),
            opening_balance: default_opening_balance(),
        }
    }
}

fn default_number() -> u32 {
    Account::SAMPLE_NUMBER
}

fn default_holder() -> String {
    Account::SAMPLE_HOLDER.to_string()
}

fn default_pin() -> u32 {
    Account::SAMPLE_PIN
}

fn default_opening_balance() -> Decimal {
    Decimal::from(Account::SAMPLE_BALANCE)
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Print the real PIN inside the PIN prompt ("Enter your PIN:1234 ")
    #[serde(default = "default_show_pin_hint")]
    pub show_pin_hint: bool,

    /// What a rejected deposit or withdrawal does to the session
    #[serde(default)]
    pub on_transaction_error: ErrorPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_pin_hint: default_show_pin_hint(),
            on_transaction_error: ErrorPolicy::default(),
        }
    }
}

fn default_show_pin_hint() -> bool {
    true
}

/// Handling of `InvalidAmount` / `InsufficientBalance` during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the error and end the session
    #[default]
    End,
    /// Report the error and show the menu again
    Continue,
}
