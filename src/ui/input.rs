use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.picker().is_visible() {
        handle_picker_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'k') {
        app.open_category_picker();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return;
        }
        KeyCode::Esc => {
            app.request_quit();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Input => handle_input_field_key(app, key),
        Focus::InputUnit | Focus::OutputUnit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.open_unit_picker(),
            KeyCode::Left => app.cycle_focused_unit(-1),
            KeyCode::Right => app.cycle_focused_unit(1),
            KeyCode::Up => app.focus_previous(),
            KeyCode::Down => app.focus_next(),
            _ => {}
        },
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'k') {
        app.close_picker();
        return;
    }
    match key.code {
        KeyCode::Esc => app.close_picker(),
        KeyCode::Up => app.move_picker_selection(-1),
        KeyCode::Down => app.move_picker_selection(1),
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 && app.jump_picker_selection(index - 1) {
                app.confirm_picker();
            }
        }
        _ => {}
    }
}

fn handle_input_field_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return;
    }
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::Up => app.focus_previous(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
