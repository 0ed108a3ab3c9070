//! Help overlay: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Modes");
    key(&mut lines, "1 / 2 / 3", "Overall Analysis / StartUp / Investor");
    key(&mut lines, "Tab / Shift+Tab", "Cycle modes forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Selectors");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "h / l", "Focus modes / selector");
    key(&mut lines, "/", "Filter names (Esc clears)");
    key(&mut lines, "Enter", "Find details for the highlighted name");
    lines.push(Line::from(""));

    section(&mut lines, "Reports");
    key(&mut lines, "t", "Toggle MoM trend between Total and Count");
    key(&mut lines, "m", "Toggle investor matching: substring / exact name");
    key(&mut lines, "J / K, PgDn / PgUp", "Scroll report sections");
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Press any key to close.",
        theme::muted(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Keyboard ")
        .title_style(theme::panel_title(true));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
