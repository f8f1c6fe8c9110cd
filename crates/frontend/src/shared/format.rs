//! Display formatting for table cells
//!
//! Keeps number, money, and date rendering consistent across widget tables.

use chrono::{DateTime, NaiveDate};

/// Separate thousands groups of an integer string with spaces.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut reversed = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(' ');
        }
        reversed.push(ch);
    }
    format!("{}{}", sign, reversed.chars().rev().collect::<String>())
}

/// Format a quantity-like number: no decimals, thousands separated.
pub fn format_number(value: f64) -> String {
    group_thousands(&format!("{:.0}", value))
}

/// Format a money amount: two decimals, thousands separated.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(&formatted),
    }
}

/// Format a plain date ("2026-08-14") as DD.MM.YYYY.
///
/// Also accepts a full timestamp and keeps only the date part.
/// Unparseable input is shown as-is.
pub fn format_date(value: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}

/// Format an RFC 3339 timestamp as DD.MM.YYYY HH:MM.
///
/// Unparseable input is shown as-is.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1234.0), "1 234");
        assert_eq!(format_number(1234567.0), "1 234 567");
        assert_eq!(format_number(-1234.0), "-1 234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(19.5), "19.50");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(-42.1), "-42.10");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-14"), "14.08.2026");
        assert_eq!(format_date("2026-08-07T16:45:00Z"), "07.08.2026");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-08-07T16:45:00Z"), "07.08.2026 16:45");
        assert_eq!(
            format_datetime("2024-12-31T23:59:59.123Z"),
            "31.12.2024 23:59"
        );
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
