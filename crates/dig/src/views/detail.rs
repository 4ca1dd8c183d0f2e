use super::BufferSink;
use crate::app::{App, LineKind};
use dig_core::{draw_clipped, Point, Rect};
use ratatui::{buffer::Buffer, style::Style};

/// Draw the visible slice of the selected record's diff.
///
/// The body is refetched here, on draw, when the selection has changed.
pub fn draw_detail(buf: &mut Buffer, app: &mut App, rect: Rect) {
    app.sync_detail();
    if rect.is_empty() {
        return;
    }

    let window = &app.screen.detail.window;
    let scroll = window.offset().column;
    for (row, line) in window.visible_lines().iter().enumerate() {
        if row >= rect.height() {
            break;
        }
        let fg = match LineKind::of(line) {
            LineKind::Added => app.theme.added,
            LineKind::Removed => app.theme.removed,
            LineKind::Context => app.theme.text,
        };
        let mut sink = BufferSink::new(buf, Style::default().fg(fg));
        let at = Point::new(rect.origin.line + row, rect.origin.column);
        draw_clipped(&mut sink, at, line, scroll, rect.width());
    }
}
