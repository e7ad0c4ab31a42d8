//! Configuration loader

use std::path::Path;
use thiserror::Error;

use crate::types::AtmConfig;
use rust_decimal::Decimal;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Reads and validates [`AtmConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AtmConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<AtmConfig, ConfigError> {
        let config: AtmConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(config: &AtmConfig) -> Result<(), ConfigError> {
        if config.account.holder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "account holder must not be empty".to_string(),
            ));
        }

        if config.account.opening_balance < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "opening balance must not be negative, got {}",
                config.account.opening_balance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorPolicy;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_sample() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config, AtmConfig::default());

        let account = config.build_account().unwrap();
        assert_eq!(account.number().value(), 101);
        assert_eq!(account.holder(), "Charlie");
        assert_eq!(account.balance(), dec!(5000));
        assert!(config.session.show_pin_hint);
        assert_eq!(config.session.on_transaction_error, ErrorPolicy::End);
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let example = include_str!("../../../config/atm.example.toml");
        assert_eq!(ConfigLoader::load_str(example).unwrap(), AtmConfig::default());
    }

    #[test]
    fn test_load_string() {
        let config_str = r#"
[account]
number = 202
holder = "Dana"
pin = 9876
opening_balance = "120.50"

[session]
show_pin_hint = false
on_transaction_error = "continue"
"#;

        let config = ConfigLoader::load_str(config_str).unwrap();
        let account = config.build_account().unwrap();

        assert_eq!(account.number().value(), 202);
        assert_eq!(account.holder(), "Dana");
        assert_eq!(account.balance(), dec!(120.50));
        assert!(!config.session.show_pin_hint);
        assert_eq!(config.session.on_transaction_error, ErrorPolicy::Continue);
    }

    #[test]
    fn test_partial_account_section() {
        let config = ConfigLoader::load_str("[account]\nholder = \"Eve\"\n").unwrap();

        assert_eq!(config.account.holder, "Eve");
        assert_eq!(config.account.pin, 1234);
        assert_eq!(config.account.opening_balance, dec!(5000));
    }

    #[test]
    fn test_validation_negative_balance() {
        let result = ConfigLoader::load_str("[account]\nopening_balance = \"-1\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_empty_holder() {
        let result = ConfigLoader::load_str("[account]\nholder = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = ConfigLoader::load_str("[session]\non_transaction_error = \"retry\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[account]\npin = 4321").unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.account.pin, 4321);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_file(dir.path().join("atm.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
