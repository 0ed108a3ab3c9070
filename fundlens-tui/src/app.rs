//! Application state — single-owner, main-thread only.
//!
//! Reports are cheap to compute, so they run inline on the event loop.

use fundlens_core::{AnalysisMode, InvestorMatch, ReportOptions, ReportRequest, TrendMetric};
use fundlens_runner::{DisplayBlock, Session};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which sidebar widget receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Modes,
    Selector,
}

/// Filterable list of startup or investor names.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub items: Vec<String>,
    pub filter: String,
    /// Index into `visible()`.
    pub cursor: usize,
}

impl SelectorState {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            filter: String::new(),
            cursor: 0,
        }
    }

    /// Items whose name contains the filter, case-insensitively.
    pub fn visible(&self) -> Vec<&str> {
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn current(&self) -> Option<&str> {
        self.visible().get(self.cursor).copied()
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.cursor = 0;
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.cursor = 0;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.cursor = 0;
    }

    /// Clear the filter and put the cursor on `name`. Returns false if absent.
    pub fn select(&mut self, name: &str) -> bool {
        self.clear_filter();
        match self.items.iter().position(|n| n == name) {
            Some(i) => {
                self.cursor = i;
                true
            }
            None => false,
        }
    }
}

/// The report currently on screen.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub request: ReportRequest,
    pub blocks: Vec<DisplayBlock>,
    /// First block shown; earlier blocks are scrolled off the top.
    pub scroll: usize,
}

pub struct AppState {
    pub running: bool,
    pub session: Session,
    pub mode: AnalysisMode,
    pub focus: Focus,
    pub trend_metric: TrendMetric,
    pub investor_match: InvestorMatch,
    /// Set once the user picks a match mode; until then the config decides.
    pub investor_match_overridden: bool,
    pub startups: SelectorState,
    pub investors: SelectorState,
    /// Keystrokes go to the active selector's filter.
    pub filtering: bool,
    pub show_help: bool,
    pub view: Option<ReportView>,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let investor_match = session.options().investor_match;
        let startups = SelectorState::new(session.startup_names());
        let investors = SelectorState::new(session.investor_names());
        let mut app = Self {
            running: true,
            session,
            mode: AnalysisMode::Overall,
            focus: Focus::Modes,
            trend_metric: TrendMetric::Total,
            investor_match,
            investor_match_overridden: false,
            startups,
            investors,
            filtering: false,
            show_help: false,
            view: None,
            status_message: None,
        };
        app.refresh_overall();
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            investor_match: self.investor_match,
            ..self.session.options()
        }
    }

    /// The selector for the current mode, if it has one.
    pub fn selector(&self) -> Option<&SelectorState> {
        match self.mode {
            AnalysisMode::Overall => None,
            AnalysisMode::Startup => Some(&self.startups),
            AnalysisMode::Investor => Some(&self.investors),
        }
    }

    pub fn selector_mut(&mut self) -> Option<&mut SelectorState> {
        match self.mode {
            AnalysisMode::Overall => None,
            AnalysisMode::Startup => Some(&mut self.startups),
            AnalysisMode::Investor => Some(&mut self.investors),
        }
    }

    /// Switch mode. Overall is shown at once; the profile modes wait for Enter.
    pub fn set_mode(&mut self, mode: AnalysisMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.filtering = false;
        match mode {
            AnalysisMode::Overall => {
                self.focus = Focus::Modes;
                self.refresh_overall();
            }
            AnalysisMode::Startup | AnalysisMode::Investor => {
                self.focus = Focus::Selector;
                self.view = None;
            }
        }
    }

    pub fn refresh_overall(&mut self) {
        self.show(ReportRequest::Overall {
            trend: self.trend_metric,
        });
    }

    /// Compute the profile report for the selector's current item.
    pub fn find_details(&mut self) {
        let request = match self.mode {
            AnalysisMode::Overall => return,
            AnalysisMode::Startup => self.startups.current().map(|name| ReportRequest::Startup {
                name: name.to_string(),
            }),
            AnalysisMode::Investor => {
                self.investors
                    .current()
                    .map(|name| ReportRequest::Investor {
                        name: name.to_string(),
                    })
            }
        };
        match request {
            Some(request) => self.show(request),
            None => self.set_warning("Nothing selected"),
        }
    }

    pub fn toggle_trend(&mut self) {
        self.trend_metric = self.trend_metric.toggle();
        if self.mode == AnalysisMode::Overall {
            self.refresh_overall();
        }
        self.set_status(format!("Trend: {}", self.trend_metric.label()));
    }

    /// Flip investor matching and rerun an investor report already on screen.
    pub fn toggle_match(&mut self) {
        self.investor_match = self.investor_match.toggle();
        self.investor_match_overridden = true;
        let rerun = self
            .view
            .as_ref()
            .map(|v| v.request.clone())
            .filter(|r| matches!(r, ReportRequest::Investor { .. }));
        if let Some(request) = rerun {
            self.show(request);
        }
        self.set_status(format!("Investor match: {}", self.investor_match.label()));
    }

    pub fn scroll_down(&mut self) {
        if let Some(view) = &mut self.view {
            if view.scroll + 1 < view.blocks.len() {
                view.scroll += 1;
            }
        }
    }

    pub fn scroll_up(&mut self) {
        if let Some(view) = &mut self.view {
            view.scroll = view.scroll.saturating_sub(1);
        }
    }

    /// Name of the last computed profile report for `mode`, if any.
    pub fn shown_name(&self, mode: AnalysisMode) -> Option<&str> {
        match self.view.as_ref().map(|v| &v.request) {
            Some(ReportRequest::Startup { name }) if mode == AnalysisMode::Startup => Some(name),
            Some(ReportRequest::Investor { name }) if mode == AnalysisMode::Investor => {
                Some(name)
            }
            _ => None,
        }
    }

    fn show(&mut self, request: ReportRequest) {
        let report = self.session.run_with(&request, &self.options());
        let blocks = self.session.render(&report);
        if let ReportRequest::Startup { name } | ReportRequest::Investor { name } = &request {
            self.set_status(format!("Showing {name}"));
        }
        self.view = Some(ReportView {
            request,
            blocks,
            scroll: 0,
        });
    }
}
