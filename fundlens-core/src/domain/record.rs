//! A single funding event as loaded from the source table.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the funding table.
///
/// Text fields are opaque grouping keys: they are never trimmed, case-folded
/// or otherwise normalised, so `"Ola"` and `"ola "` are different startups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    /// Investment date. `None` when the source value could not be parsed.
    pub date: Option<NaiveDate>,
    pub startup: String,
    /// Comma-joined investor names, exactly as they appear in the source.
    pub investors: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    /// Amount in the dataset's currency unit. `None` when missing or non-numeric.
    pub amount: Option<f64>,
}

impl InvestmentRecord {
    /// Calendar month (1-12) of the investment date.
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Calendar year of the investment date.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// `(year, month)` bucket used by the month-over-month trend.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.date.map(|d| (d.year(), d.month()))
    }

    /// Individual investor names, split on `,` without trimming.
    ///
    /// Empty tokens (from `",,"` or a trailing comma) are skipped.
    pub fn investor_tokens(&self) -> impl Iterator<Item = &str> {
        self.investors.split(',').filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: Option<NaiveDate>, investors: &str) -> InvestmentRecord {
        InvestmentRecord {
            date,
            startup: "Zomato".into(),
            investors: investors.into(),
            vertical: "Food".into(),
            city: "Gurgaon".into(),
            round: "Series J".into(),
            amount: Some(150.0),
        }
    }

    #[test]
    fn derived_month_and_year() {
        let r = record(NaiveDate::from_ymd_opt(2019, 11, 4), "");
        assert_eq!(r.month(), Some(11));
        assert_eq!(r.year(), Some(2019));
        assert_eq!(r.year_month(), Some((2019, 11)));
    }

    #[test]
    fn undated_record_has_no_derived_fields() {
        let r = record(None, "");
        assert_eq!(r.month(), None);
        assert_eq!(r.year(), None);
        assert_eq!(r.year_month(), None);
    }

    #[test]
    fn investor_tokens_are_not_trimmed() {
        let r = record(None, "Tiger Global, Sequoia Capital,,Ant Financial,");
        let tokens: Vec<&str> = r.investor_tokens().collect();
        assert_eq!(tokens, vec!["Tiger Global", " Sequoia Capital", "Ant Financial"]);
    }
}
