//! Display formatting for amounts and timestamps

use chrono::{DateTime, Utc};

fn group_digits(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Render a whole amount in `currency`.
///
/// Rupiah uses the Indonesian convention (`Rp 15.000`); any other code is
/// printed in front of a comma-grouped figure.
pub fn currency(amount: u64, code: &str) -> String {
    if code.eq_ignore_ascii_case("IDR") {
        format!("Rp {}", group_digits(amount, '.'))
    } else {
        format!("{} {}", code.to_uppercase(), group_digits(amount, ','))
    }
}

/// Like [`currency`] for a fractional figure, rounded to the nearest unit.
pub fn currency_rounded(amount: f64, code: &str) -> String {
    currency(amount.max(0.0).round() as u64, code)
}

pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_with_dots() {
        assert_eq!(currency(0, "IDR"), "Rp 0");
        assert_eq!(currency(999, "IDR"), "Rp 999");
        assert_eq!(currency(15_000, "IDR"), "Rp 15.000");
        assert_eq!(currency(1_234_567, "idr"), "Rp 1.234.567");
    }

    #[test]
    fn other_codes_group_with_commas() {
        assert_eq!(currency(15_000, "usd"), "USD 15,000");
    }

    #[test]
    fn fractional_amounts_round() {
        assert_eq!(currency_rounded(10_928.57, "IDR"), "Rp 10.929");
        assert_eq!(currency_rounded(0.0, "IDR"), "Rp 0");
    }

    #[test]
    fn timestamps_are_day_first() {
        let at: DateTime<Utc> = "2024-01-15T09:30:00Z".parse().unwrap();
        assert_eq!(timestamp(&at), "15 Jan 2024 09:30");
    }
}
