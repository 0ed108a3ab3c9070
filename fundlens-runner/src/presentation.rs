//! Turns a report into an ordered list of display blocks.
//!
//! Labels are fixed dashboard wording. Only the currency suffix is
//! configurable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fundlens_core::reports::{InvestorInvestmentRow, StartupInvestmentRow};
use fundlens_core::{
    Distribution, InvestorReport, OverallReport, Report, SeriesPoint, Slice, StartupReport,
};

/// How a distribution should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
}

/// One unit of presentation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    Title {
        text: String,
    },
    Header {
        text: String,
    },
    Metric {
        label: String,
        value: String,
    },
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Distribution {
        title: String,
        chart: ChartKind,
        slices: Vec<Slice>,
    },
    Series {
        title: String,
        points: Vec<SeriesPoint>,
    },
}

/// Placeholder for an unknown date or amount cell.
pub const MISSING: &str = "n/a";

/// Builds display blocks with a fixed currency suffix.
#[derive(Debug, Clone)]
pub struct Presenter {
    currency_unit: String,
}

impl Presenter {
    pub fn new(currency_unit: impl Into<String>) -> Self {
        Self {
            currency_unit: currency_unit.into(),
        }
    }

    pub fn currency_unit(&self) -> &str {
        &self.currency_unit
    }

    pub fn blocks(&self, report: &Report) -> Vec<DisplayBlock> {
        match report {
            Report::Overall(r) => self.overall(r),
            Report::Startup(r) => self.startup(r),
            Report::Investor(r) => self.investor(r),
        }
    }

    fn money(&self, value: String) -> String {
        format!("{value} {}", self.currency_unit)
    }

    fn overall(&self, r: &OverallReport) -> Vec<DisplayBlock> {
        let max = r.max_funding.as_ref().map_or(0.0, |m| m.amount);
        vec![
            title("Overall Analysis"),
            metric("Total", self.money(format_whole(r.total_invested))),
            metric("Max", self.money(format_whole(max.round_ties_even()))),
            metric("Avg", self.money(format_whole(r.average_ticket.unwrap_or(0.0)))),
            metric("Funded Startups", r.funded_startups.to_string()),
            header("MoM graph"),
            DisplayBlock::Series {
                title: r.trend_metric.label().to_string(),
                points: r
                    .trend
                    .iter()
                    .map(|p| SeriesPoint {
                        label: p.label.clone(),
                        value: p.value,
                    })
                    .collect(),
            },
        ]
    }

    fn startup(&self, r: &StartupReport) -> Vec<DisplayBlock> {
        vec![
            title(&r.name),
            DisplayBlock::Table {
                title: "Most Recent Investments".into(),
                columns: columns(&["date", "investors", "vertical", "city", "round", "amount"]),
                rows: r.recent.iter().map(startup_row).collect(),
            },
            metric(
                "Total Amount invested",
                self.money(format_decimal(r.total_invested)),
            ),
            metric(
                "Total Investors Involved",
                format!("{} Investors", r.investor_count),
            ),
            pie("Startup Cities", &r.cities),
            DisplayBlock::Table {
                title: "List of Investors".into(),
                columns: columns(&["investors"]),
                rows: r.investors.iter().map(|i| vec![i.clone()]).collect(),
            },
            pie("Vertical", &r.verticals),
            pie("Round", &r.rounds),
        ]
    }

    fn investor(&self, r: &InvestorReport) -> Vec<DisplayBlock> {
        vec![
            title(&r.name),
            DisplayBlock::Table {
                title: "Most Recent Investments".into(),
                columns: columns(&["date", "startup", "vertical", "city", "round", "amount"]),
                rows: r.recent.iter().map(investor_row).collect(),
            },
            DisplayBlock::Distribution {
                title: "Biggest Investments".into(),
                chart: ChartKind::Bar,
                slices: r.biggest.slices.clone(),
            },
            pie("Sectors invested in", &r.sectors),
            pie("Rounds invested in", &r.rounds),
            pie("Cities invested in", &r.cities),
            DisplayBlock::Series {
                title: "YoY Investment".into(),
                points: r.yearly.points.clone(),
            },
        ]
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new("Cr")
    }
}

fn title(text: &str) -> DisplayBlock {
    DisplayBlock::Title {
        text: text.to_string(),
    }
}

fn header(text: &str) -> DisplayBlock {
    DisplayBlock::Header {
        text: text.to_string(),
    }
}

fn metric(label: &str, value: String) -> DisplayBlock {
    DisplayBlock::Metric {
        label: label.to_string(),
        value,
    }
}

fn pie(title: &str, dist: &Distribution) -> DisplayBlock {
    DisplayBlock::Distribution {
        title: title.to_string(),
        chart: ChartKind::Pie,
        slices: dist.slices.clone(),
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn startup_row(r: &StartupInvestmentRow) -> Vec<String> {
    vec![
        format_date(r.date),
        r.investors.clone(),
        r.vertical.clone(),
        r.city.clone(),
        r.round.clone(),
        format_amount(r.amount),
    ]
}

fn investor_row(r: &InvestorInvestmentRow) -> Vec<String> {
    vec![
        format_date(r.date),
        r.startup.clone(),
        r.vertical.clone(),
        r.city.clone(),
        r.round.clone(),
        format_amount(r.amount),
    ]
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

pub fn format_amount(amount: Option<f64>) -> String {
    amount.map_or_else(|| MISSING.to_string(), format_decimal)
}

/// Whole number without a decimal point. Negative zero prints as `0`.
pub fn format_whole(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{x:.0}")
    }
}

/// Shortest round-trip decimal, always with a fractional part: `15.0`, `2497.62`.
pub fn format_decimal(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

/// Pie-slice percentage with one decimal, e.g. `33.3%`.
pub fn format_share(pct: f64) -> String {
    format!("{pct:.1}%")
}
