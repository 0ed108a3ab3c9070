//! Overall market report: totals, extremes and the month-over-month trend.

use serde::{Deserialize, Serialize};

use crate::aggregate::{round_whole, sum_by, total_amount};
use crate::domain::Dataset;

/// Metric plotted by the month-over-month trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Sum of amounts per month.
    #[default]
    Total,
    /// Number of records per month.
    Count,
}

impl TrendMetric {
    pub fn label(self) -> &'static str {
        match self {
            TrendMetric::Total => "Total",
            TrendMetric::Count => "Count",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            TrendMetric::Total => TrendMetric::Count,
            TrendMetric::Count => TrendMetric::Total,
        }
    }
}

/// The best-funded startup and its lifetime total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupTotal {
    pub startup: String,
    /// Unrounded sum of the startup's known amounts.
    pub amount: f64,
}

/// One `(year, month)` bucket of the trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    /// `"{month}-{year}"`, e.g. `"1-2020"`.
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallReport {
    /// Sum of all known amounts, rounded to a whole unit.
    pub total_invested: f64,
    /// Largest per-startup total. `None` for an empty table.
    pub max_funding: Option<StartupTotal>,
    /// Mean of per-startup totals, rounded. `None` for an empty table.
    pub average_ticket: Option<f64>,
    pub funded_startups: usize,
    pub trend_metric: TrendMetric,
    /// Chronological by `(year, month)`. Undated records are left out.
    pub trend: Vec<TrendPoint>,
}

pub fn overall_report(dataset: &Dataset, trend_metric: TrendMetric) -> OverallReport {
    let records = dataset.records();
    let per_startup = sum_by(records, |r| Some(r.startup.as_str()));

    // Strictly-greater keeps the first (lexicographically smallest) startup on ties.
    let mut max_funding: Option<StartupTotal> = None;
    for g in &per_startup {
        if max_funding.as_ref().map_or(true, |m| g.total > m.amount) {
            max_funding = Some(StartupTotal {
                startup: g.key.to_string(),
                amount: g.total,
            });
        }
    }

    let average_ticket = if per_startup.is_empty() {
        None
    } else {
        let sum: f64 = per_startup.iter().map(|g| g.total).sum();
        Some(round_whole(sum / per_startup.len() as f64))
    };

    let trend = sum_by(records, |r| r.year_month())
        .into_iter()
        .map(|g| {
            let (year, month) = g.key;
            TrendPoint {
                year,
                month,
                label: format!("{month}-{year}"),
                value: match trend_metric {
                    TrendMetric::Total => g.total,
                    TrendMetric::Count => g.rows as f64,
                },
            }
        })
        .collect();

    OverallReport {
        total_invested: round_whole(total_amount(records)),
        max_funding,
        average_ticket,
        funded_startups: per_startup.len(),
        trend_metric,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InvestmentRecord;
    use chrono::NaiveDate;

    fn rec(startup: &str, date: Option<(i32, u32, u32)>, amount: Option<f64>) -> InvestmentRecord {
        InvestmentRecord {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            startup: startup.into(),
            investors: String::new(),
            vertical: String::new(),
            city: String::new(),
            round: String::new(),
            amount,
        }
    }

    #[test]
    fn max_funding_is_per_startup_sum() {
        let ds = Dataset::new(vec![
            rec("X", None, Some(10.0)),
            rec("Y", None, Some(12.0)),
            rec("X", None, Some(5.0)),
        ]);
        let report = overall_report(&ds, TrendMetric::Total);
        let max = report.max_funding.unwrap();
        assert_eq!(max.startup, "X");
        assert_eq!(max.amount, 15.0);
    }

    #[test]
    fn max_funding_tie_prefers_smallest_name() {
        let ds = Dataset::new(vec![rec("Zeta", None, Some(7.0)), rec("Alpha", None, Some(7.0))]);
        let report = overall_report(&ds, TrendMetric::Total);
        assert_eq!(report.max_funding.unwrap().startup, "Alpha");
    }

    #[test]
    fn average_includes_startups_without_amounts() {
        let ds = Dataset::new(vec![rec("X", None, Some(10.0)), rec("Y", None, None)]);
        let report = overall_report(&ds, TrendMetric::Total);
        assert_eq!(report.average_ticket, Some(5.0));
        assert_eq!(report.funded_startups, 2);
    }

    #[test]
    fn totals_are_rounded_to_whole_units() {
        let ds = Dataset::new(vec![rec("X", None, Some(10.4)), rec("Y", None, Some(0.3))]);
        let report = overall_report(&ds, TrendMetric::Total);
        assert_eq!(report.total_invested, 11.0);
    }

    #[test]
    fn trend_total_is_chronological() {
        let ds = Dataset::new(vec![
            rec("A", Some((2020, 1, 5)), Some(4.0)),
            rec("B", Some((2019, 12, 1)), Some(1.0)),
            rec("C", Some((2020, 1, 20)), Some(6.0)),
            rec("D", None, Some(100.0)),
        ]);
        let report = overall_report(&ds, TrendMetric::Total);
        let labels: Vec<&str> = report.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["12-2019", "1-2020"]);
        assert_eq!(report.trend[1].value, 10.0);
        // Undated records still count towards the totals.
        assert_eq!(report.total_invested, 111.0);
    }

    #[test]
    fn trend_count_counts_records() {
        let ds = Dataset::new(vec![
            rec("A", Some((2020, 1, 5)), Some(4.0)),
            rec("B", Some((2020, 1, 9)), None),
        ]);
        let report = overall_report(&ds, TrendMetric::Count);
        assert_eq!(report.trend.len(), 1);
        assert_eq!(report.trend[0].value, 2.0);
    }

    #[test]
    fn months_sort_numerically_not_lexically() {
        let ds = Dataset::new(vec![
            rec("A", Some((2020, 10, 1)), Some(1.0)),
            rec("B", Some((2020, 2, 1)), Some(1.0)),
        ]);
        let report = overall_report(&ds, TrendMetric::Total);
        assert_eq!(report.trend[0].month, 2);
        assert_eq!(report.trend[1].month, 10);
    }

    #[test]
    fn empty_table_degrades_to_zero() {
        let report = overall_report(&Dataset::new(Vec::new()), TrendMetric::Total);
        assert_eq!(report.total_invested, 0.0);
        assert!(report.max_funding.is_none());
        assert!(report.average_ticket.is_none());
        assert_eq!(report.funded_startups, 0);
        assert!(report.trend.is_empty());
    }

    #[test]
    fn toggle_flips_metric() {
        assert_eq!(TrendMetric::Total.toggle(), TrendMetric::Count);
        assert_eq!(TrendMetric::Count.toggle(), TrendMetric::Total);
    }
}
