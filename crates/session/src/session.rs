//! Session controller
//!
//! States: `AwaitingPin -> Menu -> Terminated`. The PIN is asked once; the
//! menu repeats until the holder exits, types something that is not a
//! number, or (under [`ErrorPolicy::End`]) a transaction is rejected.

use std::io::{self, BufRead, Write};

use atm_config::{ErrorPolicy, SessionConfig};
use atm_core::{Account, AccountError, Pin, PinParseError};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::guard::{say, ClosingGuard};
use crate::input::{parse_amount, parse_choice, MenuChoice};

const MENU: [&str; 4] = [
    "1. Check Balance",
    "2. Deposit Money",
    "3. Withdraw Money",
    "4. Exit",
];
const CHOOSE_PROMPT: &str = "Choose an option: ";
const DEPOSIT_PROMPT: &str = "Enter deposit amount: ";
const WITHDRAW_PROMPT: &str = "Enter withdrawal amount: ";

const DEPOSIT_OK: &str = "Deposit successful";
const WITHDRAW_OK: &str = "Please collect your cash";
const FAREWELL: &str = "Thank you for using the ATM";
const INVALID_OPTION: &str = "Invalid option. Please try again.";
const INVALID_INPUT: &str = "Invalid input. Please enter numbers only.";

/// Why a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Holder chose "Exit"
    Exited,
    /// Wrong PIN
    PinRejected,
    /// Deposit or withdrawal rejected under [`ErrorPolicy::End`]
    TransactionFailed(AccountError),
    /// Text where a number was expected
    InvalidInput,
    /// Input closed before the session finished
    EndOfInput,
}

impl From<AccountError> for Termination {
    fn from(err: AccountError) -> Self {
        if err.is_invalid_pin() {
            Termination::PinRejected
        } else {
            Termination::TransactionFailed(err)
        }
    }
}

/// Outcome of [`Session::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub termination: Termination,
    pub balance: Decimal,
}

#[derive(Debug)]
enum State {
    AwaitingPin,
    Menu,
    Terminated(Termination),
}

/// One ATM session over a text terminal.
pub struct Session<R: BufRead, W: Write> {
    account: Account,
    config: SessionConfig,
    input: R,
    output: ClosingGuard<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session over `account`, reading from `input` and writing to `output`
    pub fn new(account: Account, config: SessionConfig, input: R, output: W) -> Self {
        Self {
            account,
            config,
            input,
            output: ClosingGuard::new(output),
        }
    }

    /// Run the session to completion.
    ///
    /// Domain errors and bad input are reported on the terminal and end up
    /// in the returned [`Termination`]; only terminal I/O failures are `Err`.
    /// "Session ended" is written when the session is dropped, on every path.
    pub fn run(mut self) -> io::Result<SessionReport> {
        info!(account = %self.account, "Session started");

        let mut state = State::AwaitingPin;
        let termination = loop {
            state = match state {
                State::AwaitingPin => self.await_pin()?,
                State::Menu => self.menu()?,
                State::Terminated(termination) => break termination,
            };
        };

        let balance = self.account.balance();
        info!(
            account = %self.account.number(),
            reason = ?termination,
            %balance,
            "Session terminated"
        );

        Ok(SessionReport {
            termination,
            balance,
        })
    }

    fn await_pin(&mut self) -> io::Result<State> {
        let prompt = if self.config.show_pin_hint {
            format!("Enter your PIN:{} ", self.account.pin_hint())
        } else {
            "Enter your PIN: ".to_string()
        };

        let Some(line) = self.read(&prompt)? else {
            return Ok(State::Terminated(Termination::EndOfInput));
        };

        let verified = match line.parse::<Pin>() {
            Ok(pin) => self.account.verify_pin(&pin),
            Err(PinParseError::OutOfRange(_)) => Err(AccountError::InvalidPin),
            Err(PinParseError::NotNumeric(_)) => return self.invalid_input(),
        };

        match verified {
            Ok(()) => {
                info!(account = %self.account.number(), "PIN accepted");
                Ok(State::Menu)
            }
            Err(err) => {
                warn!(account = %self.account.number(), "PIN rejected");
                say(&mut *self.output, &err.to_string())?;
                Ok(State::Terminated(err.into()))
            }
        }
    }

    fn menu(&mut self) -> io::Result<State> {
        writeln!(self.output)?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }

        let Some(line) = self.read(CHOOSE_PROMPT)? else {
            return Ok(State::Terminated(Termination::EndOfInput));
        };
        let Some(choice) = parse_choice(&line) else {
            return self.invalid_input();
        };
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::CheckBalance => {
                let balance = self.account.balance().normalize();
                say(&mut *self.output, &format!("Your balance is: {}", balance))?;
                Ok(State::Menu)
            }
            MenuChoice::Deposit => self.transact(DEPOSIT_PROMPT, Transaction::Deposit),
            MenuChoice::Withdraw => self.transact(WITHDRAW_PROMPT, Transaction::Withdraw),
            MenuChoice::Exit => {
                say(&mut *self.output, FAREWELL)?;
                Ok(State::Terminated(Termination::Exited))
            }
            MenuChoice::Unknown => {
                say(&mut *self.output, INVALID_OPTION)?;
                Ok(State::Menu)
            }
        }
    }

    fn transact(&mut self, prompt: &str, kind: Transaction) -> io::Result<State> {
        let Some(line) = self.read(prompt)? else {
            return Ok(State::Terminated(Termination::EndOfInput));
        };
        let Some(amount) = parse_amount(&line) else {
            return self.invalid_input();
        };

        let result = match kind {
            Transaction::Deposit => self.account.deposit(amount),
            Transaction::Withdraw => self.account.withdraw(amount),
        };

        match result {
            Ok(balance) => {
                info!(
                    account = %self.account.number(),
                    kind = kind.as_str(),
                    %amount,
                    %balance,
                    "Transaction completed"
                );
                say(&mut *self.output, kind.success_message())?;
                Ok(State::Menu)
            }
            Err(err) => {
                warn!(
                    account = %self.account.number(),
                    kind = kind.as_str(),
                    error = ?err,
                    "Transaction rejected"
                );
                say(&mut *self.output, &err.to_string())?;
                match self.config.on_transaction_error {
                    ErrorPolicy::End => Ok(State::Terminated(err.into())),
                    ErrorPolicy::Continue => Ok(State::Menu),
                }
            }
        }
    }

    fn invalid_input(&mut self) -> io::Result<State> {
        warn!(account = %self.account.number(), "Non-numeric input");
        say(&mut *self.output, INVALID_INPUT)?;
        Ok(State::Terminated(Termination::InvalidInput))
    }

    /// Show a prompt and read one line. `None` once input is closed.
    fn read(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[derive(Debug, Clone, Copy)]
enum Transaction {
    Deposit,
    Withdraw,
}

impl Transaction {
    fn as_str(&self) -> &'static str {
        match self {
            Transaction::Deposit => "deposit",
            Transaction::Withdraw => "withdrawal",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Transaction::Deposit => DEPOSIT_OK,
            Transaction::Withdraw => WITHDRAW_OK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_script(script: &str) -> (SessionReport, String) {
        let mut out = Vec::new();
        let session = Session::new(
            Account::sample(),
            SessionConfig::default(),
            Cursor::new(script.as_bytes()),
            &mut out,
        );
        let report = session.run().unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_right_away() {
        let (report, out) = run_script("1234\n4\n");

        assert_eq!(report.termination, Termination::Exited);
        assert_eq!(report.balance, dec!(5000));
        assert!(out.starts_with("Enter your PIN:1234 \n1. Check Balance\n"));
        assert!(out.ends_with("Choose an option: Thank you for using the ATM\nSession ended\n"));
    }

    #[test]
    fn test_end_of_input_still_closes() {
        let (report, out) = run_script("1234\n");

        assert_eq!(report.termination, Termination::EndOfInput);
        assert!(out.ends_with("Choose an option: Session ended\n"));
        assert_eq!(out.matches("Session ended").count(), 1);
    }

    #[test]
    fn test_hidden_pin_hint() {
        let mut out = Vec::new();
        let config = SessionConfig {
            show_pin_hint: false,
            ..SessionConfig::default()
        };
        Session::new(Account::sample(), config, Cursor::new("1234\n4\n"), &mut out)
            .run()
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Enter your PIN: \n"));
        assert!(!out.contains("1234"));
    }

    #[test]
    fn test_termination_from_error() {
        assert_eq!(Termination::from(AccountError::InvalidPin), Termination::PinRejected);

        let err = AccountError::invalid_amount(dec!(0));
        assert_eq!(Termination::from(err.clone()), Termination::TransactionFailed(err));
    }

    #[test]
    fn test_out_of_range_pin_is_rejected() {
        let (report, out) = run_script("-1234\n");

        assert_eq!(report.termination, Termination::PinRejected);
        assert!(out.contains("Incorrect PIN\n"));
    }
}
