//! # Pin Module
//!
//! The account holder's secret code. Debug output is redacted so a `Pin`
//! can sit inside logged structs without leaking.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing entered PIN text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinParseError {
    #[error("PIN must be numeric: {0:?}")]
    NotNumeric(String),

    #[error("PIN out of range: {0}")]
    OutOfRange(String),
}

/// Secret numeric code authenticating the account holder.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin(u32);

impl Pin {
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Exposes the digits. Only the PIN hint prompt should need this.
    pub fn reveal(&self) -> u32 {
        self.0
    }
}

impl FromStr for Pin {
    type Err = PinParseError;

    /// Parses integer text the way a terminal keypad reading would:
    /// whitespace is trimmed and a sign is allowed, anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PinParseError::NotNumeric(trimmed.to_string()));
        }

        // Negative or oversized numbers are well-formed but can never match
        trimmed
            .parse::<u32>()
            .map(Pin)
            .map_err(|_| PinParseError::OutOfRange(trimmed.to_string()))
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}
