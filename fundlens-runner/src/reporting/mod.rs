//! Rendering display blocks to text and markdown, and exporting reports.

pub mod export;
pub mod markdown;
pub mod text;

pub use export::{export_report, ExportFormat, ReportExport, EXPORT_SCHEMA_VERSION};
pub use markdown::MarkdownReportGenerator;
pub use text::render_text;
