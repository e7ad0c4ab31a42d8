//! ATM terminal - one interactive session against one account
//!
//! Usage:
//! ```bash
//! atm
//! atm --config atm.toml
//! atm --hide-pin-hint --keep-session-on-error
//! RUST_LOG=atm_session=info atm
//! ```

use anyhow::{Context, Result};
use atm_config::{AtmConfig, ConfigLoader, ErrorPolicy};
use atm_session::Session;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ATM - check balance, deposit and withdraw on a single account
#[derive(Parser)]
#[command(name = "atm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML). Without it the sample account is used
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Do not print the account PIN inside the PIN prompt
    #[arg(long)]
    pub hide_pin_hint: bool,

    /// Return to the menu after a rejected deposit or withdrawal
    #[arg(long)]
    pub keep_session_on_error: bool,
}

impl Cli {
    /// Load the config file if given, then apply flag overrides
    fn resolve_config(&self) -> Result<AtmConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AtmConfig::default(),
        };

        if self.hide_pin_hint {
            config.session.show_pin_hint = false;
        }
        if self.keep_session_on_error {
            config.session.on_transaction_error = ErrorPolicy::Continue;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Diagnostics on stderr; stdout belongs to the session
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let account = config
        .build_account()
        .context("invalid account configuration")?;

    let stdin = io::stdin();
    let session = Session::new(account, config.session, stdin.lock(), io::stdout());
    let report = session.run().context("terminal I/O failed")?;

    tracing::debug!(reason = ?report.termination, balance = %report.balance, "Exiting");
    Ok(())
}
