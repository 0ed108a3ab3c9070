//! Lenient value coercion: bad cells become "unknown", never errors.

use chrono::{NaiveDate, NaiveDateTime};

/// Outcome of coercing one raw cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    Value(T),
    /// Empty or whitespace-only cell.
    Blank,
    /// Non-empty cell that could not be parsed.
    Invalid,
}

impl<T> Coerced<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Coerced::Value(v) => Some(v),
            Coerced::Blank | Coerced::Invalid => None,
        }
    }
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an investment date, trying the accepted layouts in order.
pub fn parse_date(raw: Option<&str>) -> Coerced<NaiveDate> {
    let s = match raw.map(str::trim) {
        None | Some("") => return Coerced::Blank,
        Some(s) => s,
    };

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Coerced::Value(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Coerced::Value(dt.date());
        }
    }
    Coerced::Invalid
}

/// Parse an amount. NaN and infinities count as invalid.
pub fn parse_amount(raw: Option<&str>) -> Coerced<f64> {
    let s = match raw.map(str::trim) {
        None | Some("") => return Coerced::Blank,
        Some(s) => s,
    };

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Value(v),
        _ => Coerced::Invalid,
    }
}
