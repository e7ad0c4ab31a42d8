//! ATM Config - Configuration management
//!
//! TOML file with the account to serve and how the session behaves.
//! Every key is optional and falls back to the sample account.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AccountConfig, AtmConfig, ErrorPolicy, SessionConfig};
