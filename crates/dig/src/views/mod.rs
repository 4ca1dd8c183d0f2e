//! View rendering modules
//!
//! Every area writes straight into the frame buffer through [`BufferSink`],
//! which places the cells chosen by `dig_core::draw_clipped`.

mod detail;
mod list;
mod status;

use crate::app::App;
use dig_core::{CellSink, Point, Rect};
use ratatui::{buffer::Buffer, style::Style, Frame};

pub use detail::draw_detail;
pub use list::draw_list;
pub use status::draw_status;

/// Main drawing function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let size = Point::new(area.height as usize, area.width as usize);
    if app.screen.layout.size() != size {
        app.resize(size);
    }

    let areas = app.screen.layout.areas();
    let buf = frame.buffer_mut();
    draw_list(buf, app, areas.side);
    fill(buf, areas.gutter, '│', Style::default().fg(app.theme.gutter));
    draw_detail(buf, app, areas.main);
    draw_status(buf, app, areas.status);
}

/// Writes cells into a ratatui buffer with a fixed style.
/// Positions outside the buffer are dropped.
pub(crate) struct BufferSink<'a> {
    buf: &'a mut Buffer,
    style: Style,
}

impl<'a> BufferSink<'a> {
    pub(crate) fn new(buf: &'a mut Buffer, style: Style) -> Self {
        Self { buf, style }
    }
}

impl CellSink for BufferSink<'_> {
    fn put(&mut self, at: Point, ch: char) {
        let (Ok(x), Ok(y)) = (u16::try_from(at.column), u16::try_from(at.line)) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(self.style);
        }
    }
}

/// Fill `rect` with `ch`.
pub(crate) fn fill(buf: &mut Buffer, rect: Rect, ch: char, style: Style) {
    let mut sink = BufferSink::new(buf, style);
    let end = rect.end();
    for line in rect.origin.line..end.line {
        for column in rect.origin.column..end.column {
            sink.put(Point::new(line, column), ch);
        }
    }
}

/// Fill the columns `[from, rect.width)` of one row of `rect` with spaces.
pub(crate) fn pad_row(buf: &mut Buffer, rect: Rect, row: usize, from: usize, style: Style) {
    let width = rect.width().saturating_sub(from);
    let pad = Rect::new(
        Point::new(rect.origin.line + row, rect.origin.column + from),
        Point::new(1, width),
    );
    fill(buf, pad, ' ', style);
}

#[cfg(test)]
mod tests;
