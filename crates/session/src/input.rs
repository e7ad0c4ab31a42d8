//! Parsing of what the holder types at the terminal.

use rust_decimal::Decimal;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
    /// A number that is not on the menu
    Unknown,
}

/// Parse a menu choice. `None` if the text is not an integer at all.
pub fn parse_choice(text: &str) -> Option<MenuChoice> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let choice = match trimmed.parse::<i64>() {
        Ok(1) => MenuChoice::CheckBalance,
        Ok(2) => MenuChoice::Deposit,
        Ok(3) => MenuChoice::Withdraw,
        Ok(4) => MenuChoice::Exit,
        _ => MenuChoice::Unknown,
    };
    Some(choice)
}

/// Parse an amount in plain ("200", "-3.5") or scientific ("2e2") notation.
///
/// Sign is kept; rejecting non-positive amounts is the account's job.
/// Text that does not fit a `Decimal` without rounding is `None`, so a
/// positive entry can never come out as zero.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let amount = Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;

    if amount.is_zero() && has_nonzero_digit(trimmed) {
        return None;
    }
    Some(amount)
}

/// Any non-zero digit before the exponent
fn has_nonzero_digit(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .unwrap_or_default()
        .bytes()
        .any(|b| matches!(b, b'1'..=b'9'))
}
