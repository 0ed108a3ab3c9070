//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fundlens_core::{AnalysisMode, InvestorMatch, TrendMetric};

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub mode: AnalysisMode,
    pub trend_metric: TrendMetric,
    /// `None` keeps whatever the config file says.
    pub investor_match: Option<InvestorMatch>,
    pub selected_startup: Option<String>,
    pub selected_investor: Option<String>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        mode: app.mode,
        trend_metric: app.trend_metric,
        investor_match: app
            .investor_match_overridden
            .then_some(app.investor_match),
        selected_startup: app.startups.current().map(String::from),
        selected_investor: app.investors.current().map(String::from),
    }
}

/// Apply persisted state to AppState, recomputing the report it implies.
///
/// Names that no longer exist in the dataset are dropped silently.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(m) = state.investor_match {
        app.investor_match = m;
        app.investor_match_overridden = true;
    }
    app.trend_metric = state.trend_metric;
    let startup_found = state
        .selected_startup
        .as_deref()
        .is_some_and(|name| app.startups.select(name));
    let investor_found = state
        .selected_investor
        .as_deref()
        .is_some_and(|name| app.investors.select(name));

    app.set_mode(state.mode);
    match state.mode {
        AnalysisMode::Overall => app.refresh_overall(),
        AnalysisMode::Startup if startup_found => app.find_details(),
        AnalysisMode::Investor if investor_found => app.find_details(),
        _ => {}
    }
}
