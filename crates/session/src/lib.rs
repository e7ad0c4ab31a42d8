//! # ATM Session
//!
//! Drives one ATM session against one [`atm_core::Account`]: ask for the PIN
//! once, then loop over the menu until the holder exits or an error ends
//! the session. Works over any `BufRead` / `Write` pair so the whole
//! conversation can be scripted in tests.

pub mod guard;
pub mod input;
pub mod session;

pub use guard::ClosingGuard;
pub use input::{parse_amount, parse_choice, MenuChoice};
pub use session::{Session, SessionReport, Termination};
