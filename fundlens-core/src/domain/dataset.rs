//! The immutable in-memory funding table.

use std::collections::BTreeSet;

use crate::domain::InvestmentRecord;
use crate::fingerprint::dataset_fingerprint;

/// Read-only table of investment records.
///
/// Built once at startup and shared by reference with every report. There
/// are no mutation methods: a report can only filter and aggregate.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<InvestmentRecord>,
    fingerprint: String,
}

impl Dataset {
    pub fn new(records: Vec<InvestmentRecord>) -> Self {
        let fingerprint = dataset_fingerprint(&records);
        Self {
            records,
            fingerprint,
        }
    }

    /// All records in table order.
    pub fn records(&self) -> &[InvestmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// BLAKE3 hex digest of the table contents.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Records whose `startup` equals `name` exactly, in table order.
    pub fn records_for_startup<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a InvestmentRecord> + 'a {
        self.records.iter().filter(move |r| r.startup == name)
    }

    /// Sorted distinct startup names, used to populate the startup selector.
    pub fn startup_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.startup.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Sorted union of individual investor tokens across the whole table.
    pub fn investor_names(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.investor_tokens())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl From<Vec<InvestmentRecord>> for Dataset {
    fn from(records: Vec<InvestmentRecord>) -> Self {
        Self::new(records)
    }
}
