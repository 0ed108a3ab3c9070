//! FundLens Runner — everything between the report functions and a screen.
//!
//! - TOML dashboard configuration
//! - `Session`: load the funding table once, run report requests against it
//! - Display blocks with the dashboard's labels and number formats
//! - Text and markdown rendering, JSON/markdown export
//! - Tracing subscriber setup for the binaries

pub mod config;
pub mod logging;
pub mod presentation;
pub mod reporting;
pub mod session;

pub use config::{ConfigError, DashboardConfig, DataConfig, DisplayConfig, ReportConfig};
pub use presentation::{ChartKind, DisplayBlock, Presenter};
pub use reporting::{
    export_report, render_text, ExportFormat, MarkdownReportGenerator, ReportExport,
    EXPORT_SCHEMA_VERSION,
};
pub use session::{Session, SessionError};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn session_is_send_sync() {
        assert_send::<Session>();
        assert_sync::<Session>();
    }

    #[test]
    fn display_blocks_are_send_sync() {
        assert_send::<DisplayBlock>();
        assert_sync::<DisplayBlock>();
        assert_send::<DashboardConfig>();
        assert_sync::<DashboardConfig>();
    }
}
