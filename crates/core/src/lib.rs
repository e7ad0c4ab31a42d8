//! # ATM Core
//!
//! Domain types for a single-account ATM session: the [`Account`] with its
//! guarded balance operations, the secret [`Pin`], and the [`AccountError`]
//! taxonomy every operation reports through.

pub mod account;
pub mod error;
pub mod pin;

pub use account::{Account, AccountNumber};
pub use error::{AccountError, AccountResult};
pub use pin::{Pin, PinParseError};
