//! Data ingestion: CSV reading, header validation and value coercion.

pub mod coerce;
pub mod ingest;
pub mod schema;

pub use coerce::{parse_amount, parse_date, Coerced};
pub use ingest::{DataError, FundingIngestor, LoadSummary, LoadedDataset};
pub use schema::{FundingSchema, SchemaError};
