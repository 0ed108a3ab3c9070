//! A loaded dataset plus the configuration that governs how it is reported.
//!
//! The table is read once when the session opens and never mutated after
//! that. Every request runs against the same `Dataset`.

use thiserror::Error;
use tracing::{debug, info, warn};

use fundlens_core::{
    run_report, DataError, Dataset, FundingIngestor, LoadSummary, Report, ReportOptions,
    ReportRequest,
};

use crate::config::{ConfigError, DashboardConfig};
use crate::presentation::{DisplayBlock, Presenter};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug)]
pub struct Session {
    config: DashboardConfig,
    dataset: Dataset,
    summary: LoadSummary,
    presenter: Presenter,
}

impl Session {
    /// Validate the config and load the table it points at.
    pub fn open(config: DashboardConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let path = config.data.path.clone();
        debug!(path = %path.display(), "loading funding table");

        let loaded = FundingIngestor::new().ingest_csv(&path)?;
        let summary = loaded.summary;
        info!(
            rows = summary.rows,
            undated = summary.undated_rows(),
            unknown_amounts = summary.unknown_amounts(),
            fingerprint = loaded.dataset.fingerprint(),
            "funding table loaded"
        );
        if loaded.dataset.is_empty() {
            warn!(path = %path.display(), "funding table has no rows");
        }

        Ok(Self::from_parts(config, loaded.dataset, summary))
    }

    /// Build a session around an already loaded dataset.
    pub fn from_parts(config: DashboardConfig, dataset: Dataset, summary: LoadSummary) -> Self {
        let presenter = Presenter::new(config.display.currency_unit.clone());
        Self {
            config,
            dataset,
            summary,
            presenter,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn options(&self) -> ReportOptions {
        self.config.report_options()
    }

    /// Run a request with the configured options.
    pub fn run(&self, request: &ReportRequest) -> Report {
        self.run_with(request, &self.options())
    }

    /// Run a request with explicit options, e.g. a toggled match mode.
    pub fn run_with(&self, request: &ReportRequest, options: &ReportOptions) -> Report {
        debug!(?request, "running report");
        run_report(&self.dataset, request, options)
    }

    pub fn render(&self, report: &Report) -> Vec<DisplayBlock> {
        self.presenter.blocks(report)
    }

    pub fn startup_names(&self) -> Vec<String> {
        self.dataset.startup_names()
    }

    pub fn investor_names(&self) -> Vec<String> {
        self.dataset.investor_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fundlens_core::{InvestmentRecord, InvestorMatch, TrendMetric};

    fn session() -> Session {
        let dataset = Dataset::new(vec![InvestmentRecord {
            date: NaiveDate::from_ymd_opt(2019, 6, 1),
            startup: "Byju's".into(),
            investors: "Tiger Global,General Atlantic".into(),
            vertical: "EdTech".into(),
            city: "Bengaluru".into(),
            round: "Private Equity".into(),
            amount: Some(150.0),
        }]);
        Session::from_parts(DashboardConfig::default(), dataset, LoadSummary::default())
    }

    #[test]
    fn selector_lists_come_from_the_dataset() {
        let s = session();
        assert_eq!(s.startup_names(), vec!["Byju's"]);
        assert_eq!(s.investor_names(), vec!["General Atlantic", "Tiger Global"]);
    }

    #[test]
    fn run_with_overrides_match_mode() {
        let s = session();
        let request = ReportRequest::Investor {
            name: "Tiger".into(),
        };
        let Report::Investor(loose) = s.run(&request) else {
            panic!("expected investor report");
        };
        assert_eq!(loose.matched, 1);

        let strict = ReportOptions {
            investor_match: InvestorMatch::Strict,
            ..s.options()
        };
        let Report::Investor(exact) = s.run_with(&request, &strict) else {
            panic!("expected investor report");
        };
        assert_eq!(exact.matched, 0);
    }

    #[test]
    fn render_uses_configured_unit() {
        let mut config = DashboardConfig::default();
        config.display.currency_unit = "USD M".into();
        let s = Session::from_parts(config, session().dataset().clone(), LoadSummary::default());
        let blocks = s.render(&s.run(&ReportRequest::Overall {
            trend: TrendMetric::Total,
        }));
        assert!(blocks.contains(&DisplayBlock::Metric {
            label: "Total".into(),
            value: "150 USD M".into(),
        }));
    }

    #[test]
    fn open_reports_missing_file() {
        let mut config = DashboardConfig::default();
        config.data.path = "/definitely/not/here.csv".into();
        let err = Session::open(config).err().unwrap();
        assert!(matches!(err, SessionError::Data(DataError::Io { .. })));
    }
}
