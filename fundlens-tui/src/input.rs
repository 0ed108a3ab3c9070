//! Keyboard input dispatch — help overlay → filter entry → global keys → focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use fundlens_core::AnalysisMode;

use crate::app::{AppState, Focus};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Help overlay swallows the next key.
    if app.show_help {
        app.show_help = false;
        return;
    }

    // 2. Filter entry takes every printable key.
    if app.filtering {
        handle_filter_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('1') => {
            app.set_mode(AnalysisMode::Overall);
            return;
        }
        KeyCode::Char('2') => {
            app.set_mode(AnalysisMode::Startup);
            return;
        }
        KeyCode::Char('3') => {
            app.set_mode(AnalysisMode::Investor);
            return;
        }
        KeyCode::Tab => {
            app.set_mode(app.mode.next());
            return;
        }
        KeyCode::BackTab => {
            app.set_mode(app.mode.prev());
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_trend();
            return;
        }
        KeyCode::Char('m') => {
            app.toggle_match();
            return;
        }
        KeyCode::PageDown | KeyCode::Char('J') => {
            app.scroll_down();
            return;
        }
        KeyCode::PageUp | KeyCode::Char('K') => {
            app.scroll_up();
            return;
        }
        _ => {}
    }

    // 4. Focus-specific keys.
    match app.focus {
        Focus::Modes => handle_modes_key(app, key),
        Focus::Selector => handle_selector_key(app, key),
    }
}

fn handle_modes_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.set_mode(app.mode.next()),
        KeyCode::Char('k') | KeyCode::Up => app.set_mode(app.mode.prev()),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => {
            if app.selector().is_some() {
                app.focus = Focus::Selector;
            }
        }
        _ => {}
    }
}

fn handle_selector_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(sel) = app.selector_mut() {
                sel.move_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(sel) = app.selector_mut() {
                sel.move_up();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::Modes,
        KeyCode::Char('/') => app.filtering = true,
        KeyCode::Esc => {
            if let Some(sel) = app.selector_mut() {
                sel.clear_filter();
            }
        }
        KeyCode::Enter => app.find_details(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.filtering = false;
            if let Some(sel) = app.selector_mut() {
                sel.clear_filter();
            }
        }
        KeyCode::Enter => {
            app.filtering = false;
            app.find_details();
        }
        KeyCode::Down => {
            if let Some(sel) = app.selector_mut() {
                sel.move_down();
            }
        }
        KeyCode::Up => {
            if let Some(sel) = app.selector_mut() {
                sel.move_up();
            }
        }
        KeyCode::Backspace => {
            if let Some(sel) = app.selector_mut() {
                sel.pop_filter();
            }
        }
        KeyCode::Char(c) => {
            if let Some(sel) = app.selector_mut() {
                sel.push_filter(c);
            }
        }
        _ => {}
    }
}
