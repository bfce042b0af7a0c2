//! Amount parsing and currency formatting for the mini app.
//!
//! Form inputs arrive as free text. Parsing keeps the leading integer part of
//! the input (so "12.7" is 12 and "300 rub" is 300) and refuses anything that
//! does not start with a digit. Formatting groups digits by three with a
//! non-breaking space, the way Russian locale number formatting does.

use thiserror::Error;

/// Separator placed between groups of three digits
pub const GROUP_SEPARATOR: char = '\u{a0}';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("amount does not start with a number: {0:?}")]
    NotANumber(String),
    #[error("amount is too large")]
    Overflow,
}

/// Parse the integer prefix of `input`, truncating any fractional part.
///
/// Leading whitespace and a single sign are accepted. Whatever follows the
/// digits is ignored.
pub fn parse_amount(input: &str) -> Result<i64, AmountParseError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return Err(AmountParseError::NotANumber(input.trim().to_string()));
    }

    let magnitude = digits.parse::<i64>().map_err(|_| AmountParseError::Overflow)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Format a whole amount with grouped digits followed by the currency symbol
pub fn format_currency(amount: i64, currency_symbol: &str) -> String {
    format!("{} {}", group_digits(amount), currency_symbol)
}

/// Format an amount with an explicit sign, for history rows
pub fn format_signed_currency(amount: i64, currency_symbol: &str) -> String {
    if amount > 0 {
        format!("+{}", format_currency(amount, currency_symbol))
    } else {
        format_currency(amount, currency_symbol)
    }
}

fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
