//! Display formatting for amounts, rates, dates and addresses.

use chrono::{DateTime, Utc};

/// Format a USD amount with thousands separators and two decimals.
///
/// `1234.5` becomes `$1,234.50`; negative values become `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a USD amount with a K/M/B suffix.
pub fn format_compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();
    if v >= 1_000_000_000.0 {
        format!("{sign}${:.2}B", v / 1_000_000_000.0)
    } else if v >= 1_000_000.0 {
        format!("{sign}${:.2}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{sign}${:.2}K", v / 1_000.0)
    } else {
        let fixed = format!("{:.2}", v);
        let sign = if fixed == "0.00" { "" } else { sign };
        format!("{sign}${fixed}")
    }
}

/// Format a value already expressed in percent.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Format a date as `Jan 05, 2025`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Shorten an address to `prefix` leading and `suffix` trailing characters.
///
/// Addresses too short to benefit are returned unchanged.
pub fn truncate_address(address: &str, prefix: usize, suffix: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix + suffix + 3 {
        return address.to_string();
    }
    let head: String = chars[..prefix].iter().collect();
    let tail: String = chars[chars.len() - suffix..].iter().collect();
    format!("{head}...{tail}")
}
