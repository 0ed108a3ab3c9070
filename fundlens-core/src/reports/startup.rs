//! Startup profile: one company's funding history and breakdowns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{round_to, total_amount, value_counts, Distribution};
use crate::domain::{Dataset, InvestmentRecord};
use crate::reports::{select_recent, ReportOptions};

/// A startup's funding event, projected for the recent-investments table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupInvestmentRow {
    pub date: Option<NaiveDate>,
    pub investors: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    pub amount: Option<f64>,
}

impl From<&InvestmentRecord> for StartupInvestmentRow {
    fn from(r: &InvestmentRecord) -> Self {
        Self {
            date: r.date,
            investors: r.investors.clone(),
            vertical: r.vertical.clone(),
            city: r.city.clone(),
            round: r.round.clone(),
            amount: r.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupReport {
    pub name: String,
    /// Number of records with this exact startup name.
    pub matched: usize,
    pub recent: Vec<StartupInvestmentRow>,
    /// Sum of known amounts, rounded to two decimals.
    pub total_invested: f64,
    /// Matching rows, not distinct investor names.
    pub investor_count: usize,
    pub cities: Distribution,
    /// Raw `investors` field of every matching record.
    pub investors: Vec<String>,
    pub verticals: Distribution,
    pub rounds: Distribution,
}

pub fn startup_report(dataset: &Dataset, name: &str, options: &ReportOptions) -> StartupReport {
    let matches: Vec<&InvestmentRecord> = dataset.records_for_startup(name).collect();

    let recent = select_recent(matches.clone(), options.recent_order, options.recent_limit)
        .into_iter()
        .map(StartupInvestmentRow::from)
        .collect();

    StartupReport {
        name: name.to_string(),
        matched: matches.len(),
        recent,
        total_invested: round_to(total_amount(matches.iter().copied()), 2),
        investor_count: matches.len(),
        cities: value_counts(matches.iter().copied(), |r| r.city.as_str()),
        investors: matches.iter().map(|r| r.investors.clone()).collect(),
        verticals: value_counts(matches.iter().copied(), |r| r.vertical.as_str()),
        rounds: value_counts(matches.iter().copied(), |r| r.round.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecentOrder;

    fn rec(
        startup: &str,
        date: (i32, u32, u32),
        investors: &str,
        city: &str,
        round: &str,
        amount: Option<f64>,
    ) -> InvestmentRecord {
        InvestmentRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            startup: startup.into(),
            investors: investors.into(),
            vertical: "Fintech".into(),
            city: city.into(),
            round: round.into(),
            amount,
        }
    }

    fn paytm_history() -> Dataset {
        Dataset::new(vec![
            rec("Paytm", (2015, 3, 1), "Ant Financial", "Noida", "Series D", Some(680.0)),
            rec("Ola", (2017, 1, 1), "SoftBank", "Bengaluru", "Series I", Some(2000.0)),
            rec("Paytm", (2017, 5, 18), "SoftBank", "Noida", "Series E", Some(1400.0)),
            rec("Paytm", (2018, 8, 28), "Berkshire Hathaway", "Noida", "Series F", Some(356.12)),
            rec("Paytm", (2019, 11, 25), "T Rowe Price,Ant Financial", "Noida", "Series G", None),
            rec("Paytm", (2016, 8, 1), "Mediatek", "Bengaluru", "Series D", Some(60.0)),
            rec("Paytm", (2014, 1, 1), "SAIF Partners", "Noida", "Seed", Some(1.5)),
        ])
    }

    #[test]
    fn recent_takes_first_five_in_table_order() {
        let report = startup_report(&paytm_history(), "Paytm", &ReportOptions::default());
        assert_eq!(report.recent.len(), 5);
        assert_eq!(report.recent[0].investors, "Ant Financial");
        assert_eq!(report.recent[4].investors, "Mediatek");
    }

    #[test]
    fn recent_can_sort_by_date() {
        let opts = ReportOptions {
            recent_order: RecentOrder::MostRecentFirst,
            ..ReportOptions::default()
        };
        let report = startup_report(&paytm_history(), "Paytm", &opts);
        assert_eq!(report.recent[0].round, "Series G");
        assert_eq!(report.recent[4].round, "Series D");
        assert_eq!(report.recent[4].investors, "Ant Financial");
    }

    #[test]
    fn totals_and_counts() {
        let report = startup_report(&paytm_history(), "Paytm", &ReportOptions::default());
        assert_eq!(report.total_invested, 2497.62);
        assert_eq!(report.investor_count, 6);
        assert_eq!(report.matched, 6);
        assert_eq!(report.investors.len(), 6);
        assert_eq!(report.investors[3], "T Rowe Price,Ant Financial");
    }

    #[test]
    fn breakdowns_are_value_counts() {
        let report = startup_report(&paytm_history(), "Paytm", &ReportOptions::default());
        assert_eq!(report.cities.slices[0].label, "Noida");
        assert_eq!(report.cities.slices[0].value, 5.0);
        assert_eq!(report.cities.slices[1].label, "Bengaluru");
        assert_eq!(report.verticals.len(), 1);
        assert_eq!(report.rounds.slices[0].label, "Series D");
        assert_eq!(report.rounds.slices[0].value, 2.0);
    }

    #[test]
    fn unknown_startup_is_empty_not_an_error() {
        let report = startup_report(&paytm_history(), "Flipkart", &ReportOptions::default());
        assert_eq!(report.matched, 0);
        assert!(report.recent.is_empty());
        assert_eq!(report.total_invested, 0.0);
        assert_eq!(report.investor_count, 0);
        assert!(report.cities.is_empty());
        assert!(report.verticals.is_empty());
        assert!(report.rounds.is_empty());
        assert!(report.investors.is_empty());
    }

    #[test]
    fn name_match_is_exact() {
        let report = startup_report(&paytm_history(), "paytm", &ReportOptions::default());
        assert_eq!(report.matched, 0);
    }
}
