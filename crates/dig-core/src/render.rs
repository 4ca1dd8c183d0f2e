//! Width-aware line clipping
//!
//! Code points are not byte aligned and do not have a fixed display width,
//! so the column of any character is only known after decoding every
//! character before it. [`draw_clipped`] therefore always decodes from the
//! start of the line and only draws what lands inside the visible columns.

use crate::geometry::Point;
use unicode_width::UnicodeWidthChar;

/// Something that accepts single cell writes.
///
/// Frontends implement this over their own buffer type and carry the style
/// themselves; the clipper only decides which character goes where.
pub trait CellSink {
    fn put(&mut self, at: Point, ch: char);
}

/// Display width of a code point. Control and combining characters are 0.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Display width of a whole string.
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Draw one line of `text` at `at`, scrolled left by `scroll` columns and
/// clipped to `width` columns.
///
/// A character is drawn only when all of its cells fall inside
/// `[0, width)`. Characters left of the edge are decoded and skipped;
/// decoding stops once the running column reaches `width`.
///
/// Returns the number of leading visible columns covered by drawn cells,
/// which is where right padding should begin.
pub fn draw_clipped<S: CellSink + ?Sized>(
    sink: &mut S,
    at: Point,
    text: &str,
    scroll: usize,
    width: usize,
) -> usize {
    let max = width as isize;
    let mut column = -(scroll as isize);
    let mut filled = 0usize;

    for ch in text.chars() {
        if column >= max {
            break;
        }
        let w = char_width(ch);
        if w == 0 {
            continue;
        }
        let end = column + w as isize;
        if column >= 0 && end <= max {
            sink.put(Point::new(at.line, at.column + column as usize), ch);
            filled = end as usize;
        }
        column = end;
    }

    filled
}
