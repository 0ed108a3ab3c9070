//! Domain types: one funding record and the immutable table of records.

pub mod dataset;
pub mod record;

pub use dataset::Dataset;
pub use record::InvestmentRecord;
