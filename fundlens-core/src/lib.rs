//! FundLens Core — data model, loading and aggregation for startup funding analysis.
//!
//! This crate contains everything that decides *what* a report says:
//! - Typed investment records and the immutable `Dataset`
//! - CSV ingestion with lenient date/amount coercion
//! - Group/sum/count primitives
//! - The overall, startup and investor reports, plus mode dispatch
//! - A content fingerprint for the loaded table
//!
//! Rendering and configuration live in `fundlens-runner`.

pub mod aggregate;
pub mod data;
pub mod domain;
pub mod fingerprint;
pub mod reports;

pub use aggregate::{Distribution, Series, SeriesPoint, Slice};
pub use data::{DataError, FundingIngestor, LoadSummary, LoadedDataset};
pub use domain::{Dataset, InvestmentRecord};
pub use reports::{
    run_report, AnalysisMode, InvestorMatch, InvestorReport, OverallReport, RecentOrder, Report,
    ReportOptions, ReportRequest, StartupReport, TrendMetric,
};
