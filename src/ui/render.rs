use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::picker::render_picker_dialog;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    RESULT_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.conversion();

    frame.render_widget(Header::new().widget(state.selected_category()), header);
    frame.render_widget(Clear, body);

    let form = form_regions(body);
    let input_inner = render_value_field(
        frame,
        form.input,
        "Enter value",
        state.input_text(),
        state.input_unit().name,
        app.focus() == Focus::Input,
        Style::default().fg(HEADER_TEXT),
    );
    render_unit_selector(
        frame,
        form.input_unit,
        state.input_unit().name,
        app.focus() == Focus::InputUnit,
    );
    render_value_field(
        frame,
        form.output,
        "Converted value",
        state.output_text(),
        state.output_unit().name,
        false,
        Style::default().fg(RESULT_TEXT).add_modifier(Modifier::BOLD),
    );
    render_unit_selector(
        frame,
        form.output_unit,
        state.output_unit().name,
        app.focus() == Focus::OutputUnit,
    );

    frame.render_widget(Footer::new().widget(footer), footer);

    if app.picker().is_visible() {
        render_picker_dialog(frame, body, app.picker());
    } else if app.focus() == Focus::Input && input_inner.width > 0 && input_inner.height > 0 {
        let offset = state.input_text().chars().count() as u16;
        let x = input_inner.x + offset.min(input_inner.width.saturating_sub(1));
        frame.set_cursor_position((x, input_inner.y));
    }
}

/// Bordered text field with the unit name as a right-aligned suffix.
/// Returns the inner area so the caller can place the cursor.
fn render_value_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &'static str,
    value: &str,
    suffix: &'static str,
    focused: bool,
    value_style: Style,
) -> Rect {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(format!(" {label} "), Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(value.to_string(), value_style))),
        inner,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{suffix} "),
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .alignment(Alignment::Right),
        inner,
    );
    inner
}

fn render_unit_selector(frame: &mut Frame<'_>, area: Rect, unit: &'static str, focused: bool) {
    let mut style = Style::default().fg(ACCENT);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{unit} ▾"), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
