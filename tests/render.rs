mod common;

use common::{ctrl, key, new_app, type_text};
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use unitconv::ui::app::App;
use unitconv::ui::input::handle_key;
use unitconv::ui::render::draw;

fn screen_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn renders_category_units_and_values() {
    let mut app = new_app();
    type_text(&mut app, "2500");
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Right));

    let text = screen_text(&app, 90, 24);
    assert!(text.contains("Unit Converter"));
    assert!(text.contains("Length/Distance"));
    assert!(text.contains("Enter value"));
    assert!(text.contains("Converted value"));
    assert!(text.contains("2500"));
    assert!(text.contains("250000"));
    assert!(text.contains("Meter"));
    assert!(text.contains("Centimeter"));
    assert!(text.contains("Ctrl+Q: Quit"));
}

#[test]
fn renders_picker_popup() {
    let mut app = new_app();
    handle_key(&mut app, ctrl('k'));
    let text = screen_text(&app, 90, 24);
    assert!(text.contains("Select Conversion Category"));
    assert!(text.contains("Fuel Efficiency"));
    assert!(text.contains("Enter: Select"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = new_app();
    let _ = screen_text(&app, 8, 3);
}
