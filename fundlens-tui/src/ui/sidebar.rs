//! Sidebar — mode selector, trend/match settings, and the name selector.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use fundlens_core::AnalysisMode;

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Startup Funding Analysis ")
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(inner);

    render_modes(f, chunks[0], app);
    render_settings(f, chunks[1], app);
    if let Some(label) = selector_label(app.mode) {
        render_selector(f, chunks[2], app, label);
    }
}

fn selector_label(mode: AnalysisMode) -> Option<&'static str> {
    match mode {
        AnalysisMode::Overall => None,
        AnalysisMode::Startup => Some("StartUp"),
        AnalysisMode::Investor => Some("Investor"),
    }
}

fn render_modes(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![Line::from(Span::styled("Select One", theme::muted()))];
    for mode in AnalysisMode::ALL {
        let (marker, style) = if mode == app.mode {
            ("▸ ", theme::selected())
        } else {
            ("  ", theme::text())
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{} {}", mode.index() + 1, mode.label()),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_settings(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Select Type  ", theme::muted()),
            Span::styled(app.trend_metric.label(), theme::accent()),
            Span::styled("  (t)", theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("Match        ", theme::muted()),
            Span::styled(app.investor_match.label(), theme::accent()),
            Span::styled("  (m)", theme::muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_selector(f: &mut Frame, area: Rect, app: &AppState, label: &str) {
    let Some(selector) = app.selector() else {
        return;
    };
    let focused = app.focus == Focus::Selector;

    let title = if selector.filter.is_empty() && !app.filtering {
        format!(" Select {label} ")
    } else {
        format!(" Select {label} /{} ", selector.filter)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(area);

    let shown = app.shown_name(app.mode);
    let items: Vec<ListItem> = selector
        .visible()
        .into_iter()
        .map(|name| {
            let style = if Some(name) == shown {
                theme::positive()
            } else {
                theme::text()
            };
            ListItem::new(Span::styled(name.to_string(), style))
        })
        .collect();
    let count = items.len();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected())
        .highlight_symbol("▸ ");
    let mut state = ListState::default();
    if count > 0 {
        state.select(Some(selector.cursor));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    let hint = Line::from(Span::styled(
        format!("Enter: Find {label} Details"),
        theme::accent_bold(),
    ));
    f.render_widget(Paragraph::new(hint), chunks[1]);
}

#[cfg(test)]
mod tests {
    use fundlens_core::AnalysisMode;

    use crate::app::test_support;
    use crate::ui::test_render::{contains, screen};

    #[test]
    fn sidebar_shows_title_and_modes() {
        let app = test_support::app();
        let lines = screen(&app, 120, 30);
        assert!(contains(&lines, "Startup Funding Analysis"));
        assert!(contains(&lines, "1 Overall Analysis"));
        assert!(contains(&lines, "2 StartUp"));
        assert!(contains(&lines, "3 Investor"));
        assert!(contains(&lines, "Select Type  Total"));
    }

    #[test]
    fn startup_mode_lists_names_and_button() {
        let mut app = test_support::app();
        app.set_mode(AnalysisMode::Startup);
        let lines = screen(&app, 120, 30);
        assert!(contains(&lines, "Select StartUp"));
        assert!(contains(&lines, "Paytm"));
        assert!(contains(&lines, "Zomato"));
        assert!(contains(&lines, "Enter: Find StartUp Details"));
    }

    #[test]
    fn filter_shows_in_title() {
        let mut app = test_support::app();
        app.set_mode(AnalysisMode::Investor);
        app.filtering = true;
        app.investors.push_filter('a');
        app.investors.push_filter('n');
        let lines = screen(&app, 120, 30);
        assert!(contains(&lines, "Select Investor /an"));
        assert!(contains(&lines, "Ant Financial"));
    }
}
