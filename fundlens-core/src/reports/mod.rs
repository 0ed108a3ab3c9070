//! The three canned reports and the mode dispatch that selects one.
//!
//! Every report is a pure function of `(&Dataset, request, options)`: the
//! same inputs always give the same report, and nothing here can fail. An
//! unknown startup or investor simply produces an empty report.

pub mod investor;
pub mod overall;
pub mod startup;

use serde::{Deserialize, Serialize};

use crate::domain::{Dataset, InvestmentRecord};

pub use investor::{investor_report, InvestorInvestmentRow, InvestorMatch, InvestorReport};
pub use overall::{overall_report, OverallReport, StartupTotal, TrendMetric, TrendPoint};
pub use startup::{startup_report, StartupInvestmentRow, StartupReport};

/// How the "recent investments" table picks its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecentOrder {
    /// First matching rows in table order, regardless of date.
    #[default]
    #[serde(rename = "table")]
    TableOrder,
    /// Matching rows sorted by date, newest first; undated rows last.
    #[serde(rename = "most_recent")]
    MostRecentFirst,
}

/// Knobs shared by the profile reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub investor_match: InvestorMatch,
    pub recent_order: RecentOrder,
    /// Rows in the "recent investments" tables.
    pub recent_limit: usize,
    /// Bars in the investor's "biggest investments" chart.
    pub top_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            investor_match: InvestorMatch::Loose,
            recent_order: RecentOrder::TableOrder,
            recent_limit: 5,
            top_limit: 5,
        }
    }
}

/// Top-level analysis selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    #[default]
    Overall,
    Startup,
    Investor,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Overall,
        AnalysisMode::Startup,
        AnalysisMode::Investor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::Overall => "Overall Analysis",
            AnalysisMode::Startup => "StartUp",
            AnalysisMode::Investor => "Investor",
        }
    }

    pub fn index(self) -> usize {
        match self {
            AnalysisMode::Overall => 0,
            AnalysisMode::Startup => 1,
            AnalysisMode::Investor => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A fully parameterised report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReportRequest {
    Overall { trend: TrendMetric },
    Startup { name: String },
    Investor { name: String },
}

impl ReportRequest {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            ReportRequest::Overall { .. } => AnalysisMode::Overall,
            ReportRequest::Startup { .. } => AnalysisMode::Startup,
            ReportRequest::Investor { .. } => AnalysisMode::Investor,
        }
    }
}

/// Output of one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Overall(OverallReport),
    Startup(StartupReport),
    Investor(InvestorReport),
}

impl Report {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Report::Overall(_) => AnalysisMode::Overall,
            Report::Startup(_) => AnalysisMode::Startup,
            Report::Investor(_) => AnalysisMode::Investor,
        }
    }
}

/// Dispatch a request to exactly one report function.
pub fn run_report(dataset: &Dataset, request: &ReportRequest, options: &ReportOptions) -> Report {
    match request {
        ReportRequest::Overall { trend } => Report::Overall(overall_report(dataset, *trend)),
        ReportRequest::Startup { name } => {
            Report::Startup(startup_report(dataset, name, options))
        }
        ReportRequest::Investor { name } => {
            Report::Investor(investor_report(dataset, name, options))
        }
    }
}

/// Pick the rows for a "recent investments" table.
pub(crate) fn select_recent<'a>(
    mut matches: Vec<&'a InvestmentRecord>,
    order: RecentOrder,
    limit: usize,
) -> Vec<&'a InvestmentRecord> {
    if order == RecentOrder::MostRecentFirst {
        // Option orders None first, so reversing puts undated rows last.
        matches.sort_by(|a, b| b.date.cmp(&a.date));
    }
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dated(startup: &str, date: Option<(i32, u32, u32)>) -> InvestmentRecord {
        InvestmentRecord {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            startup: startup.into(),
            investors: "Accel".into(),
            vertical: "SaaS".into(),
            city: "Pune".into(),
            round: "Seed".into(),
            amount: Some(1.0),
        }
    }

    #[test]
    fn mode_cycles() {
        assert_eq!(AnalysisMode::Overall.next(), AnalysisMode::Startup);
        assert_eq!(AnalysisMode::Investor.next(), AnalysisMode::Overall);
        assert_eq!(AnalysisMode::Overall.prev(), AnalysisMode::Investor);
    }

    #[test]
    fn mode_labels_match_the_dashboard() {
        let labels: Vec<&str> = AnalysisMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Overall Analysis", "StartUp", "Investor"]);
    }

    #[test]
    fn dispatch_runs_the_requested_report() {
        let ds = Dataset::new(vec![dated("Ola", Some((2020, 1, 1)))]);
        let opts = ReportOptions::default();
        for request in [
            ReportRequest::Overall { trend: TrendMetric::Count },
            ReportRequest::Startup { name: "Ola".into() },
            ReportRequest::Investor { name: "Accel".into() },
        ] {
            let report = run_report(&ds, &request, &opts);
            assert_eq!(report.mode(), request.mode());
        }
    }

    #[test]
    fn table_order_keeps_first_rows() {
        let records = vec![
            dated("a", Some((2015, 1, 1))),
            dated("b", Some((2020, 1, 1))),
            dated("c", None),
        ];
        let refs: Vec<&InvestmentRecord> = records.iter().collect();
        let picked = select_recent(refs, RecentOrder::TableOrder, 2);
        let names: Vec<&str> = picked.iter().map(|r| r.startup.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn most_recent_first_sorts_by_date_with_undated_last() {
        let records = vec![
            dated("undated", None),
            dated("old", Some((2015, 1, 1))),
            dated("new", Some((2020, 1, 1))),
        ];
        let refs: Vec<&InvestmentRecord> = records.iter().collect();
        let picked = select_recent(refs, RecentOrder::MostRecentFirst, 5);
        let names: Vec<&str> = picked.iter().map(|r| r.startup.as_str()).collect();
        assert_eq!(names, vec!["new", "old", "undated"]);
    }
}
