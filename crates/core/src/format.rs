//! Display formatting, fixed to en-US dollars.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// "$1,234.50". Negative amounts render as "-$1,234.50".
/// NaN renders as "$NaN" and infinities as "$∞" / "-$∞".
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}$∞");
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// "$1.5K" from 1,000 and "$2.5M" from 1,000,000; smaller amounts use [`format_currency`].
/// Halves round up: 1,250 is "$1.3K".
pub fn format_compact_currency(amount: f64) -> String {
    if !amount.is_finite() {
        format_currency(amount)
    } else if amount >= 1_000_000.0 {
        format!("${:.1}M", round_tenths(amount / 1_000_000.0))
    } else if amount >= 1_000.0 {
        format!("${:.1}K", round_tenths(amount / 1_000.0))
    } else {
        format_currency(amount)
    }
}

/// "Jan 05, 2024".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Whole days from `now` to `target`, rounded up (partial days count as a full day ahead).
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (target - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

/// "Today", "Tomorrow", "Yesterday", "In N days" or "N days ago".
pub fn format_relative_date(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_until(target, now) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        days if days > 1 => format!("In {days} days"),
        days => format!("{} days ago", -days),
    }
}

/// "42.5% used".
pub fn format_usage(percentage: f64) -> String {
    format!("{percentage:.1}% used")
}

/// `{:.1}` alone rounds ties to even.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
