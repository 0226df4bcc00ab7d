//! Points calculation for receipts.
//!
//! The score is the sum of seven independent rules. A rule that cannot
//! interpret its input (an unparseable total, price, date or time) scores
//! zero for that input instead of failing the whole calculation.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::domain::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

type Rule = fn(&Receipt) -> i64;

/// The scoring rules, in the order they are applied.
const RULES: [Rule; 7] = [
    retailer_alphanumeric,
    round_dollar_total,
    quarter_multiple_total,
    item_pairs,
    description_length,
    odd_purchase_day,
    afternoon_purchase,
];

/// Calculates the points awarded for a receipt.
///
/// Pure and deterministic: the same receipt always yields the same,
/// non-negative score.
///
pub fn calculate(receipt: &Receipt) -> i64 {
    RULES
        .iter()
        .map(|rule| rule(receipt))
        .fold(0, i64::saturating_add)
}

/// One point for every letter or number in the retailer name.
fn retailer_alphanumeric(receipt: &Receipt) -> i64 {
    let count = receipt
        .retailer
        .chars()
        .filter(|&c| is_letter_or_number(c))
        .count();
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// True for general categories L* and N*. Combining marks and symbols
/// such as circled letters do not count.
fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// 50 points if the total is a round dollar amount with no cents.
fn round_dollar_total(receipt: &Receipt) -> i64 {
    if receipt.total.ends_with(".00") {
        50
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
fn quarter_multiple_total(receipt: &Receipt) -> i64 {
    let is_multiple = parse_decimal(&receipt.total)
        .and_then(|total| total.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.checked_rem(Decimal::from(25)))
        .is_some_and(|remainder| remainder.is_zero());

    if is_multiple {
        25
    } else {
        0
    }
}

/// 5 points for every two items on the receipt.
fn item_pairs(receipt: &Receipt) -> i64 {
    i64::try_from(receipt.items.len() / 2)
        .unwrap_or(i64::MAX)
        .saturating_mul(5)
}

/// For every item whose trimmed description length is a multiple of 3,
/// the price multiplied by 0.2 and rounded up.
///
/// The length is measured in bytes. A description that trims to nothing
/// has length 0 and therefore qualifies.
///
fn description_length(receipt: &Receipt) -> i64 {
    // Exact decimal maths: "15.00" earns 3, where a float multiply would give 4.
    let multiplier = Decimal::new(2, 1);

    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| parse_decimal(&item.price))
        .filter_map(|price| price.checked_mul(multiplier))
        .filter_map(|bonus| bonus.ceil().to_i64())
        .map(|bonus| bonus.max(0))
        .fold(0, i64::saturating_add)
}

/// 6 points if the day in the purchase date is odd.
fn odd_purchase_day(receipt: &Receipt) -> i64 {
    match parse_date(&receipt.purchase_date) {
        Some(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points if the purchase happened during the 14:00 hour or at 15:00
/// exactly. 15:01 and later do not qualify.
fn afternoon_purchase(receipt: &Receipt) -> i64 {
    match parse_time(&receipt.purchase_time).map(|time| (time.hour(), time.minute())) {
        Some((14, _)) | Some((15, 0)) => 10,
        _ => 0,
    }
}

/// Parses a plain decimal amount. Digit separators are not part of the
/// amount format, so underscores are rejected.
fn parse_decimal(value: &str) -> Option<Decimal> {
    if value.contains('_') {
        return None;
    }
    value.parse::<Decimal>().ok()
}

/// Parses a `YYYY-MM-DD` date, rejecting anything not zero-padded.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
}

/// Parses a 24-hour `HH:MM` time, rejecting anything not zero-padded.
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == value)
}
