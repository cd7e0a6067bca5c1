mod common;

use common::{ctrl, key, new_app, type_text};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unitconv::ui::app::Focus;
use unitconv::ui::input::handle_key;
use unitconv::ui::picker::PickerKind;

#[test]
fn typing_updates_input_and_output() {
    let mut app = new_app();
    type_text(&mut app, "25");
    assert_eq!(app.conversion().input_text(), "25");
    assert_eq!(app.conversion().output_text(), "25");
}

#[test]
fn backspace_and_clear() {
    let mut app = new_app();
    type_text(&mut app, "123");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.conversion().input_text(), "12");
    assert_eq!(app.conversion().output_text(), "12");

    handle_key(&mut app, ctrl('u'));
    assert_eq!(app.conversion().input_text(), "");
    // Empty text does not parse, the last result stays
    assert_eq!(app.conversion().output_text(), "12");
}

#[test]
fn letters_do_not_change_output() {
    let mut app = new_app();
    type_text(&mut app, "5");
    type_text(&mut app, "x");
    assert_eq!(app.conversion().input_text(), "5x");
    assert_eq!(app.conversion().output_text(), "5");
}

#[test]
fn release_events_are_ignored() {
    let mut app = new_app();
    let mut release = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert_eq!(app.conversion().input_text(), "");
}

#[test]
fn tab_cycles_focus() {
    let mut app = new_app();
    assert_eq!(app.focus(), Focus::Input);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::InputUnit);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::OutputUnit);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Input);
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus(), Focus::OutputUnit);
}

#[test]
fn category_picker_selects_category() {
    let mut app = new_app();
    handle_key(&mut app, ctrl('k'));
    assert_eq!(app.picker().kind(), Some(PickerKind::Category));
    assert_eq!(
        app.picker().selection(),
        Some((PickerKind::Category, "Length/Distance"))
    );

    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(!app.picker().is_visible());
    assert_eq!(app.conversion().selected_category(), "Weight/Mass");
    assert_eq!(app.conversion().input_unit().name, "Gram");
    assert_eq!(app.conversion().output_unit().name, "Gram");
}

#[test]
fn digit_in_picker_selects_directly() {
    let mut app = new_app();
    handle_key(&mut app, ctrl('k'));
    handle_key(&mut app, key(KeyCode::Char('4')));
    assert!(!app.picker().is_visible());
    assert_eq!(app.conversion().selected_category(), "Temperature");
}

#[test]
fn out_of_range_digit_keeps_picker_open() {
    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.picker().kind(), Some(PickerKind::InputUnit));
    handle_key(&mut app, key(KeyCode::Char('9')));
    assert!(app.picker().is_visible());
}

#[test]
fn escape_closes_picker_without_change() {
    let mut app = new_app();
    handle_key(&mut app, ctrl('k'));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.picker().is_visible());
    assert!(!app.should_quit());
    assert_eq!(app.conversion().selected_category(), "Length/Distance");
}

#[test]
fn unit_pickers_drive_the_conversion() {
    let mut app = new_app();
    type_text(&mut app, "2500");

    // Input unit: Centimeter -> Meter
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.picker().kind(), Some(PickerKind::InputUnit));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.conversion().input_unit().name, "Meter");

    // Output unit: Centimeter -> Kilometer
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.picker().kind(), Some(PickerKind::OutputUnit));
    handle_key(&mut app, key(KeyCode::Char('3')));
    assert_eq!(app.conversion().output_unit().name, "Kilometer");

    assert_eq!(app.conversion().output_text(), "2.5");
}

#[test]
fn arrows_cycle_focused_unit() {
    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Left));
    assert_eq!(app.conversion().input_unit().name, "Mile");
    handle_key(&mut app, key(KeyCode::Right));
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.conversion().input_unit().name, "Meter");
    assert_eq!(app.conversion().output_unit().name, "Centimeter");
}

#[test]
fn quit_keys() {
    let mut app = new_app();
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());
}
