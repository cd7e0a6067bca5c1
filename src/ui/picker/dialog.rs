use crate::ui::layout::centered_rect_by_size;
use crate::ui::picker::state::PickerState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MIN_DIALOG_WIDTH: u16 = 36;
const HINT: &str = "Up/Down: Move  Enter: Select  Esc: Close";

/// Draw the picker over `area`. Does nothing while hidden.
pub fn render_picker_dialog(frame: &mut Frame<'_>, area: Rect, state: &PickerState) {
    let PickerState::Visible {
        kind,
        items,
        selected,
    } = state
    else {
        return;
    };

    let name_width = items
        .iter()
        .map(|item| item.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = idx == *selected;
            let marker = if is_selected { "(•)" } else { "( )" };
            let number = if idx < 9 {
                format!("{}. ", idx + 1)
            } else {
                "   ".to_string()
            };
            let mut line = Line::from(vec![
                Span::styled(format!(" {number}"), Style::default().fg(HEADER_TEXT)),
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::raw(" "),
                Span::styled(
                    format!("{:<width$} ", item, width = name_width),
                    Style::default().fg(HEADER_TEXT),
                ),
            ]);
            if is_selected {
                line = line.style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                );
            }
            line
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {HINT}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width
        .saturating_add(3)
        .max(kind.title().len() as u16 + 4)
        .max(MIN_DIALOG_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let popup_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", kind.title()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
