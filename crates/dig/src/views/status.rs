use super::{pad_row, BufferSink};
use crate::app::{App, Mode};
use dig_core::{draw_clipped, text_width, Point, Rect};
use ratatui::{buffer::Buffer, style::Style};

const NORMAL_HELP: &str = "q: quit, j/k: move, f/b: page, tab: switch pane, /: find, s: side panel, </>: resize side";

/// Draw the single status row: key help or the find prompt.
pub fn draw_status(buf: &mut Buffer, app: &App, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    let style = Style::default()
        .fg(app.theme.status_fg)
        .bg(app.theme.status_bg);
    let width = rect.width();

    let (left, right) = match app.session.mode {
        Mode::Normal => {
            let position = format!(
                "{}/{}",
                app.screen.list.current() + 1,
                app.session.records.len()
            );
            (NORMAL_HELP.to_string(), position)
        }
        Mode::Find => {
            let mut prompt = format!("find: {}", app.session.query);
            if app.session.find_missed {
                prompt.push_str("  (no match)");
            }
            (prompt, String::new())
        }
    };

    let right_width = text_width(&right);
    let left_width = if right_width == 0 {
        width
    } else {
        width.saturating_sub(right_width + 1)
    };

    let mut sink = BufferSink::new(buf, style);
    let filled = draw_clipped(&mut sink, rect.origin, &left, 0, left_width);
    pad_row(buf, rect, 0, filled, style);

    if right_width > 0 && right_width <= width {
        let at = Point::new(rect.origin.line, rect.origin.column + width - right_width);
        let mut sink = BufferSink::new(buf, style);
        draw_clipped(&mut sink, at, &right, 0, right_width);
    }
}
