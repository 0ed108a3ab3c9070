//! Group/aggregate primitives shared by the three reports.
//!
//! Groups are keyed by `Ord` keys and come back in key order, so every
//! breakdown is deterministic regardless of table order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::InvestmentRecord;

/// Sum of `amount` over one group of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountGroup<K> {
    pub key: K,
    /// Sum of known amounts. Unknown amounts are skipped.
    pub total: f64,
    /// Records in the group with a known amount.
    pub known: usize,
    /// All records in the group.
    pub rows: usize,
}

impl<K> AmountGroup<K> {
    /// Whether at least one record contributed an amount.
    pub fn has_amount(&self) -> bool {
        self.known > 0
    }
}

/// Group records by `key` and sum their amounts.
///
/// Records for which `key` returns `None` are left out entirely. Groups are
/// returned in ascending key order.
pub fn sum_by<'a, K, I, F>(records: I, mut key: F) -> Vec<AmountGroup<K>>
where
    K: Ord,
    I: IntoIterator<Item = &'a InvestmentRecord>,
    F: FnMut(&'a InvestmentRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, (f64, usize, usize)> = BTreeMap::new();
    for r in records {
        let Some(k) = key(r) else { continue };
        let acc = groups.entry(k).or_insert((0.0, 0, 0));
        if let Some(a) = r.amount {
            acc.0 += a;
            acc.1 += 1;
        }
        acc.2 += 1;
    }
    groups
        .into_iter()
        .map(|(key, (total, known, rows))| AmountGroup {
            key,
            total,
            known,
            rows,
        })
        .collect()
}

/// Sum of known amounts.
pub fn total_amount<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
{
    records.into_iter().filter_map(|r| r.amount).sum()
}

/// Value counts of a text field: count descending, then label ascending.
///
/// Blank labels are left out.
pub fn value_counts<'a, I, F>(records: I, mut field: F) -> Distribution
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
    F: FnMut(&'a InvestmentRecord) -> &'a str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in records.into_iter().map(&mut field) {
        if label.is_empty() {
            continue;
        }
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    // Stable sort keeps the BTreeMap's label order among equal counts.
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    Distribution {
        slices: pairs
            .into_iter()
            .map(|(label, n)| Slice {
                label: label.to_string(),
                value: n as f64,
            })
            .collect(),
    }
}

/// One labelled value of a distribution (pie slice or bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// A labelled categorical distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub slices: Vec<Slice>,
}

impl Distribution {
    /// Build from amount groups, dropping groups with no known amount.
    pub fn from_groups(groups: Vec<AmountGroup<String>>) -> Self {
        Self {
            slices: groups
                .into_iter()
                .filter(AmountGroup::has_amount)
                .map(|g| Slice {
                    label: g.key,
                    value: g.total,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Percentage share of each slice. All zeros when the total is zero.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| {
                if total == 0.0 {
                    0.0
                } else {
                    s.value / total * 100.0
                }
            })
            .collect()
    }
}

/// One point of an ordered trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// An ordered series for line charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// Round to the nearest integer, ties to even.
pub fn round_whole(x: f64) -> f64 {
    x.round_ties_even()
}

/// Round to `decimals` places, ties to even.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}
