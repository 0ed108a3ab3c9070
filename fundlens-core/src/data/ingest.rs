use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::coerce::{parse_amount, parse_date, Coerced};
use crate::data::schema::{FundingSchema, SchemaError};
use crate::domain::{Dataset, InvestmentRecord};

/// Raw CSV row before coercion. Every cell is optional text.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: Option<String>,
    startup: Option<String>,
    investors: Option<String>,
    vertical: Option<String>,
    city: Option<String>,
    round: Option<String>,
    amount: Option<String>,
}

/// Counts of cells that were coerced to "unknown" during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub rows: usize,
    pub blank_dates: usize,
    pub invalid_dates: usize,
    pub blank_amounts: usize,
    pub invalid_amounts: usize,
}

impl LoadSummary {
    /// Rows whose date is unknown (blank or unparseable).
    pub fn undated_rows(&self) -> usize {
        self.blank_dates + self.invalid_dates
    }

    /// Rows whose amount is unknown (blank or unparseable).
    pub fn unknown_amounts(&self) -> usize {
        self.blank_amounts + self.invalid_amounts
    }
}

/// A loaded table plus what the loader had to coerce.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub summary: LoadSummary,
}

/// CSV ingestor for funding tables.
#[derive(Debug, Default)]
pub struct FundingIngestor;

impl FundingIngestor {
    pub fn new() -> Self {
        Self
    }

    /// Ingest a CSV file from disk.
    pub fn ingest_csv(&self, path: &Path) -> Result<LoadedDataset, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading funding csv");
        self.ingest_reader(file)
    }

    /// Ingest CSV from any reader. The first row must be a header.
    pub fn ingest_reader<R: Read>(&self, reader: R) -> Result<LoadedDataset, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        FundingSchema::validate(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut summary = LoadSummary::default();

        for row in rdr.deserialize::<RawRow>() {
            let row = row?;
            records.push(coerce_row(row, &mut summary));
        }
        summary.rows = records.len();

        if summary.invalid_dates > 0 || summary.invalid_amounts > 0 {
            warn!(
                rows = summary.rows,
                invalid_dates = summary.invalid_dates,
                invalid_amounts = summary.invalid_amounts,
                "unparseable cells were treated as unknown"
            );
        }
        debug!(?summary, "funding table loaded");

        Ok(LoadedDataset {
            dataset: Dataset::new(records),
            summary,
        })
    }
}

fn coerce_row(row: RawRow, summary: &mut LoadSummary) -> InvestmentRecord {
    let date = match parse_date(row.date.as_deref()) {
        Coerced::Value(d) => Some(d),
        Coerced::Blank => {
            summary.blank_dates += 1;
            None
        }
        Coerced::Invalid => {
            summary.invalid_dates += 1;
            None
        }
    };
    let amount = match parse_amount(row.amount.as_deref()) {
        Coerced::Value(a) => Some(a),
        Coerced::Blank => {
            summary.blank_amounts += 1;
            None
        }
        Coerced::Invalid => {
            summary.invalid_amounts += 1;
            None
        }
    };

    InvestmentRecord {
        date,
        startup: row.startup.unwrap_or_default(),
        investors: row.investors.unwrap_or_default(),
        vertical: row.vertical.unwrap_or_default(),
        city: row.city.unwrap_or_default(),
        round: row.round.unwrap_or_default(),
        amount,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}
