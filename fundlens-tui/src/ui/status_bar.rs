//! Bottom status bar — key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = if app.filtering {
        " type to filter  Enter:find  Esc:clear"
    } else {
        " 1-3:mode /:filter Enter:find t:trend m:match ?:help q:quit"
    };
    let mut spans = vec![Span::styled(hints, theme::muted())];

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{} rows", app.session.dataset().len()),
        theme::muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
