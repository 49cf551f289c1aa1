// src/domain/metrics.rs

use crate::domain::amount::Amount;
use crate::domain::listing::ListingRecord;

/// Per-record numbers and strings that feed template selection and the letter body.
/// Recomputed from the record whenever needed; never stored on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub ltv: f64,
    pub rounded_balance: i64,
    pub short_address: String,
    pub agent_first_name: String,
}

impl DerivedMetrics {
    pub fn derive(record: &ListingRecord) -> Self {
        Self {
            ltv: ltv(record.mortgage_balance, record.list_price),
            rounded_balance: rounded_balance(record.mortgage_balance),
            short_address: short_address(record.address.as_deref().unwrap_or("")),
            agent_first_name: first_name(record.agent_name.as_deref().unwrap_or("")),
        }
    }
}

/// Everything before the first whitespace. `"Jane Q. Agent"` -> `"Jane"`.
pub fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

/// Street name without house number or unit, e.g.
/// `"123 Main St Apt 4, Springfield, IL"` -> `"Main St"`.
pub fn short_address(full_address: &str) -> String {
    let street_line = full_address.split(',').next().unwrap_or("");

    let mut words = street_line
        .split_whitespace()
        .take_while(|w| !is_unit_marker(w))
        .peekable();

    if words
        .peek()
        .is_some_and(|w| w.starts_with(|c: char| c.is_ascii_digit()))
    {
        words.next();
    }

    words.collect::<Vec<_>>().join(" ")
}

/// `Unit`, `APT`, `Apt.`, `Unit#3`, `apt4`: the marker word, then nothing or a non-letter.
fn is_unit_marker(word: &str) -> bool {
    ["unit", "apt"].iter().any(|marker| {
        word.get(..marker.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(marker))
            && !word[marker.len()..].starts_with(|c: char| c.is_alphabetic())
    })
}

/// Floors to the nearest thousand. Missing, zero and negative amounts give 0.
pub fn rounded_balance(amount: Amount) -> i64 {
    match amount.nonzero() {
        Some(v) if v > 0.0 => ((v / 1000.0).floor() * 1000.0) as i64,
        _ => 0,
    }
}

/// Whole-dollar US currency: `250000` -> `"$250,000"`. Missing or zero gives `"$0"`.
pub fn currency(amount: Amount) -> String {
    let Some(v) = amount.nonzero() else {
        return "$0".to_string();
    };

    let rounded = v.round();
    let digits = format!("{}", rounded.abs() as u64);
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Loan-to-value as a percentage. 0.0 unless both amounts are present and
/// non-zero; the result is always finite and non-negative.
pub fn ltv(mortgage_balance: Amount, list_price: Amount) -> f64 {
    let (Some(balance), Some(price)) = (mortgage_balance.nonzero(), list_price.nonzero()) else {
        return 0.0;
    };

    let ratio = (balance / price) * 100.0;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        0.0
    }
}
