//! Property tests for report invariants.
//!
//! Uses proptest to verify:
//! 1. Total invariant — table total equals the sum of per-startup totals
//! 2. Max funding — equals the largest per-startup total and bounds every record
//! 3. Count consistency — distinct startups equals the number of startup groups
//! 4. Idempotence — the same request twice gives the same report
//! 5. Substring matching — loose matches are a superset of strict matches
//! 6. Trend ordering — MoM and YoY series are chronological

use chrono::NaiveDate;
use proptest::prelude::*;
use fundlens_core::aggregate::sum_by;
use fundlens_core::reports::{investor_report, overall_report};
use fundlens_core::{
    run_report, Dataset, InvestmentRecord, InvestorMatch, ReportOptions, ReportRequest,
    TrendMetric,
};

// ── Strategies (proptest) ────────────────────────────────────────────

const STARTUPS: [&str; 5] = ["Ola", "Ola ", "Swiggy", "Zomato", "paytm"];
const INVESTORS: [&str; 5] = ["A", "AB", "Sequoia", "Sequoia Capital", "Accel"];

fn arb_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![
        1 => Just(None),
        4 => (2014..2021i32, 1..=12u32, 1..=28u32)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    ]
}

// Whole-unit amounts keep float sums exact regardless of summation order.
fn arb_amount() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        4 => (0..10_000u32).prop_map(|a| Some(a as f64)),
    ]
}

fn arb_investors() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(INVESTORS.to_vec()), 1..4)
        .prop_map(|names| names.join(","))
}

fn arb_record() -> impl Strategy<Value = InvestmentRecord> {
    (
        arb_date(),
        prop::sample::select(STARTUPS.to_vec()),
        arb_investors(),
        prop::sample::select(vec!["EdTech", "FinTech", "Food"]),
        prop::sample::select(vec!["Bengaluru", "Mumbai"]),
        prop::sample::select(vec!["Seed", "Series A"]),
        arb_amount(),
    )
        .prop_map(|(date, startup, investors, vertical, city, round, amount)| InvestmentRecord {
            date,
            startup: startup.to_string(),
            investors,
            vertical: vertical.to_string(),
            city: city.to_string(),
            round: round.to_string(),
            amount,
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..40).prop_map(Dataset::new)
}

fn raw_total(ds: &Dataset) -> f64 {
    ds.records().iter().filter_map(|r| r.amount).sum()
}

proptest! {
    /// Sum over all records equals the sum of per-startup sums.
    #[test]
    fn total_equals_sum_of_startup_totals(ds in arb_dataset()) {
        let per_startup: f64 = sum_by(ds.records(), |r| Some(r.startup.as_str()))
            .iter()
            .map(|g| g.total)
            .sum();
        prop_assert_eq!(raw_total(&ds), per_startup);

        let report = overall_report(&ds, TrendMetric::Total);
        prop_assert_eq!(report.total_invested, raw_total(&ds).round_ties_even());
    }

    /// Max funding is the largest group sum and never below a single record.
    #[test]
    fn max_funding_bounds_every_record(ds in arb_dataset()) {
        let report = overall_report(&ds, TrendMetric::Total);
        let groups = sum_by(ds.records(), |r| Some(r.startup.as_str()));
        match report.max_funding {
            None => prop_assert!(ds.is_empty()),
            Some(max) => {
                let largest = groups.iter().map(|g| g.total).fold(f64::MIN, f64::max);
                prop_assert_eq!(max.amount, largest);
                for r in ds.records() {
                    if let Some(a) = r.amount {
                        prop_assert!(max.amount >= a);
                    }
                }
            }
        }
    }

    /// Distinct startup count equals the number of startup groups.
    #[test]
    fn distinct_startups_match_group_count(ds in arb_dataset()) {
        let report = overall_report(&ds, TrendMetric::Count);
        let groups = sum_by(ds.records(), |r| Some(r.startup.clone()));
        prop_assert_eq!(report.funded_startups, groups.len());
        prop_assert_eq!(report.funded_startups, ds.startup_names().len());
    }

    /// Running a report twice on an unchanged table yields identical output.
    #[test]
    fn reports_are_idempotent(
        ds in arb_dataset(),
        startup in prop::sample::select(STARTUPS.to_vec()),
        investor in prop::sample::select(INVESTORS.to_vec()),
    ) {
        let opts = ReportOptions::default();
        for request in [
            ReportRequest::Overall { trend: TrendMetric::Total },
            ReportRequest::Overall { trend: TrendMetric::Count },
            ReportRequest::Startup { name: startup.to_string() },
            ReportRequest::Investor { name: investor.to_string() },
        ] {
            prop_assert_eq!(run_report(&ds, &request, &opts), run_report(&ds, &request, &opts));
        }
    }

    /// Loose matching selects every record whose field contains the name.
    #[test]
    fn loose_match_is_substring_superset_of_strict(
        ds in arb_dataset(),
        investor in prop::sample::select(INVESTORS.to_vec()),
    ) {
        let loose = investor_report(&ds, investor, &ReportOptions::default());
        let expected = ds.records().iter().filter(|r| r.investors.contains(investor)).count();
        prop_assert_eq!(loose.matched, expected);

        let strict_opts = ReportOptions {
            investor_match: InvestorMatch::Strict,
            ..ReportOptions::default()
        };
        let strict = investor_report(&ds, investor, &strict_opts);
        prop_assert!(strict.matched <= loose.matched);
    }

    /// Trend series are ordered chronologically.
    #[test]
    fn trends_are_chronological(
        ds in arb_dataset(),
        investor in prop::sample::select(INVESTORS.to_vec()),
    ) {
        let overall = overall_report(&ds, TrendMetric::Total);
        for pair in overall.trend.windows(2) {
            prop_assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
        }

        let report = investor_report(&ds, investor, &ReportOptions::default());
        let years: Vec<i32> = report
            .yearly
            .points
            .iter()
            .map(|p| p.label.parse().unwrap())
            .collect();
        for pair in years.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Count trend accounts for every dated record exactly once.
    #[test]
    fn count_trend_covers_dated_records(ds in arb_dataset()) {
        let report = overall_report(&ds, TrendMetric::Count);
        let counted: f64 = report.trend.iter().map(|p| p.value).sum();
        let dated = ds.records().iter().filter(|r| r.date.is_some()).count();
        prop_assert_eq!(counted, dated as f64);
    }
}
