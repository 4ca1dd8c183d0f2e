use super::{pad_row, BufferSink};
use crate::app::{App, Focus};
use dig_core::{draw_clipped, Point, Rect};
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

/// Draw the record titles, highlighting the selection across the full row.
pub fn draw_list(buf: &mut Buffer, app: &mut App, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    let height = rect.height();
    app.screen.list.fit(height);

    let normal = Style::default().fg(app.theme.text);
    let mut selected = Style::default()
        .fg(app.theme.selection_fg)
        .bg(app.theme.selection_bg);
    if app.session.focus == Focus::List {
        selected = selected.add_modifier(Modifier::BOLD);
    }

    let current = app.screen.list.current();
    let range = app
        .screen
        .list
        .visible_range(app.session.records.len(), height);
    let top = range.start;
    for idx in range {
        let row = idx - top;
        let is_selected = idx == current;
        let style = if is_selected { selected } else { normal };
        let at = Point::new(rect.origin.line + row, rect.origin.column);
        let mut sink = BufferSink::new(buf, style);
        let filled = draw_clipped(
            &mut sink,
            at,
            &app.session.records[idx].title,
            0,
            rect.width(),
        );
        if is_selected {
            pad_row(buf, rect, row, filled, style);
        }
    }
}
