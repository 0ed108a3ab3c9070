//! Colour palette and reusable styles.
//!
//! Neon accents on a dark terminal: cyan for focus, green for amounts,
//! orange for warnings, pink for errors, steel blue for secondary text.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;
pub const SELECTION_BG: Color = Color::Rgb(40, 44, 52);

/// Cycled through for distribution bars so adjacent slices differ.
pub const SERIES_COLORS: [Color; 5] = [ACCENT, POSITIVE, NEUTRAL, WARNING, NEGATIVE];

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn selected() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn slice_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
