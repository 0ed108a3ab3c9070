//! Investor profile: portfolio breakdowns for one investor name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{sum_by, AmountGroup, Distribution, Series, SeriesPoint, Slice};
use crate::domain::{Dataset, InvestmentRecord};
use crate::reports::{select_recent, ReportOptions};

/// How an investor name is matched against a record's `investors` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorMatch {
    /// Plain substring of the raw comma-joined field.
    ///
    /// `"Sequoia"` also matches records that only list `"Sequoia Capital"`.
    #[default]
    Loose,
    /// Exact equality with one of the comma-split tokens.
    Strict,
}

impl InvestorMatch {
    /// An empty name matches nothing in either mode.
    pub fn matches(self, record: &InvestmentRecord, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self {
            InvestorMatch::Loose => record.investors.contains(name),
            InvestorMatch::Strict => record.investor_tokens().any(|t| t == name),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestorMatch::Loose => "loose",
            InvestorMatch::Strict => "strict",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            InvestorMatch::Loose => InvestorMatch::Strict,
            InvestorMatch::Strict => InvestorMatch::Loose,
        }
    }
}

/// An investor's deal, projected for the recent-investments table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorInvestmentRow {
    pub date: Option<NaiveDate>,
    pub startup: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    pub amount: Option<f64>,
}

impl From<&InvestmentRecord> for InvestorInvestmentRow {
    fn from(r: &InvestmentRecord) -> Self {
        Self {
            date: r.date,
            startup: r.startup.clone(),
            vertical: r.vertical.clone(),
            city: r.city.clone(),
            round: r.round.clone(),
            amount: r.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorReport {
    pub name: String,
    pub match_mode: InvestorMatch,
    pub matched: usize,
    pub recent: Vec<InvestorInvestmentRow>,
    /// Per-startup sums, largest first.
    pub biggest: Distribution,
    pub sectors: Distribution,
    pub rounds: Distribution,
    pub cities: Distribution,
    /// Per-year sums in ascending year order.
    pub yearly: Series,
}

pub fn investor_report(dataset: &Dataset, name: &str, options: &ReportOptions) -> InvestorReport {
    let mode = options.investor_match;
    let matches: Vec<&InvestmentRecord> = dataset
        .records()
        .iter()
        .filter(|r| mode.matches(r, name))
        .collect();

    let recent = select_recent(matches.clone(), options.recent_order, options.recent_limit)
        .into_iter()
        .map(InvestorInvestmentRow::from)
        .collect();

    InvestorReport {
        name: name.to_string(),
        match_mode: mode,
        matched: matches.len(),
        recent,
        biggest: biggest_investments(&matches, options.top_limit),
        sectors: amount_by(&matches, |r| r.vertical.as_str()),
        rounds: amount_by(&matches, |r| r.round.as_str()),
        cities: amount_by(&matches, |r| r.city.as_str()),
        yearly: yearly_series(&matches),
    }
}

fn amount_by<F>(matches: &[&InvestmentRecord], field: F) -> Distribution
where
    F: Fn(&InvestmentRecord) -> &str,
{
    Distribution::from_groups(sum_by(matches.iter().copied(), |r| {
        let key = field(r);
        (!key.is_empty()).then(|| key.to_string())
    }))
}

fn biggest_investments(matches: &[&InvestmentRecord], limit: usize) -> Distribution {
    let mut groups: Vec<AmountGroup<&str>> = sum_by(matches.iter().copied(), |r| {
        Some(r.startup.as_str())
    })
    .into_iter()
    .filter(AmountGroup::has_amount)
    .collect();

    // Stable: equal totals stay in name order.
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups.truncate(limit);

    Distribution {
        slices: groups
            .into_iter()
            .map(|g| Slice {
                label: g.key.to_string(),
                value: g.total,
            })
            .collect(),
    }
}

fn yearly_series(matches: &[&InvestmentRecord]) -> Series {
    Series {
        points: sum_by(matches.iter().copied(), |r| r.year())
            .into_iter()
            .filter(AmountGroup::has_amount)
            .map(|g| SeriesPoint {
                label: g.key.to_string(),
                value: g.total,
            })
            .collect(),
    }
}
