//! Brazilian Real formatting
//!
//! Amounts are carried as integer centavos everywhere; this module is the only
//! place that turns them into text or back.

use crate::error::{Error, Result};

const SYMBOL: &str = "R$";
const MASK: &str = "•••••";

/// Render an amount in centavos as `R$ 1.234,56`
pub fn format_brl(cents: i64) -> String {
    let magnitude = cents.unsigned_abs();
    let reais = group_thousands(magnitude / 100);
    let centavos = magnitude % 100;
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{SYMBOL} {reais},{centavos:02}")
}

/// Render an amount, masking it entirely when privacy blur is on
pub fn format_amount(cents: i64, privacy_blur: bool) -> String {
    if privacy_blur {
        format!("{SYMBOL} {MASK}")
    } else {
        format_brl(cents)
    }
}

/// Parse user-entered BRL text into centavos.
///
/// Accepts `1234`, `1234.5`, `1234,56` and `1.234,56`, optionally prefixed by
/// `R$` and/or a minus sign. With a comma present, dots are thousands
/// separators; without one, a single dot followed by one or two digits is the
/// decimal point. Thousands groups must be well formed (`1.234.567`): a
/// leading group of one to three digits, then groups of exactly three.
pub fn parse_brl(text: &str) -> Result<i64> {
    let invalid = || Error::InvalidInput(format!("invalid amount '{}'", text.trim()));

    let mut rest = text.trim();
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped.trim_start();
    }
    if let Some(stripped) = rest.strip_prefix(SYMBOL) {
        rest = stripped.trim_start();
    }
    if !negative {
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped.trim_start();
        }
    }

    let (whole, fraction) = split_decimal(rest).ok_or_else(invalid)?;
    let whole = ungroup_thousands(whole).ok_or_else(invalid)?;

    let reais: i64 = whole.parse().map_err(|_| invalid())?;
    let centavos: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    let cents = reais
        .checked_mul(100)
        .and_then(|value| value.checked_add(centavos))
        .ok_or_else(invalid)?;
    Ok(if negative { -cents } else { cents })
}

/// Split into whole and fractional text; the fraction is empty or 1-2 digits
fn split_decimal(text: &str) -> Option<(&str, &str)> {
    let is_fraction = |part: &str| {
        (1..=2).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
    };

    if let Some((whole, fraction)) = text.rsplit_once(',') {
        return is_fraction(fraction).then_some((whole, fraction));
    }

    match text.split_once('.') {
        Some((whole, fraction)) if !fraction.contains('.') && is_fraction(fraction) => {
            Some((whole, fraction))
        }
        _ => Some((text, "")),
    }
}

/// Strip well-formed thousands separators, rejecting anything else
fn ungroup_thousands(whole: &str) -> Option<String> {
    let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    let mut groups = whole.split('.');
    let first = groups.next().filter(|first| is_digits(first))?;
    let mut digits = first.to_string();

    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        grouped = true;
        digits.push_str(group);
    }

    if grouped && first.len() > 3 {
        return None;
    }
    Some(digits)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
