//! Scrolling viewport over a line-oriented text body

use crate::geometry::{Point, Rect};
use crate::render::text_width;

/// A viewport sliding over a text body.
///
/// `bound.origin` is the scroll offset (first visible line, first visible
/// column) and `bound.size` is the viewport size. Every move clamps instead
/// of failing: the first visible line stays within `[0, len - 1]` so at least
/// the last line remains on screen, and the first visible column stays within
/// `[0, widest - 1]` so at least one column of the widest line remains.
#[derive(Debug, Clone, Default)]
pub struct TextWindow {
    bound: Rect,
    text: Vec<String>,
    widest: usize,
}

impl TextWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text body and scroll back to the top-left corner.
    pub fn reset(&mut self, text: Vec<String>) {
        self.widest = text.iter().map(|line| text_width(line)).max().unwrap_or(0);
        self.text = text;
        self.bound.origin = Point::default();
    }

    pub fn set_size(&mut self, size: Point) {
        self.bound.size = size;
    }

    pub fn bound(&self) -> Rect {
        self.bound
    }

    pub fn offset(&self) -> Point {
        self.bound.origin
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// Lines inside the vertical scroll range.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.bound.origin.line.min(self.text.len());
        let end = start
            .saturating_add(self.bound.size.line)
            .min(self.text.len());
        &self.text[start..end]
    }

    fn max_line(&self) -> usize {
        self.text.len().saturating_sub(1)
    }

    fn max_column(&self) -> usize {
        self.widest.saturating_sub(1)
    }

    pub fn move_up(&mut self, n: usize) {
        self.bound.origin.line = self.bound.origin.line.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        self.bound.origin.line = self
            .bound
            .origin
            .line
            .saturating_add(n)
            .min(self.max_line());
    }

    pub fn move_left(&mut self, n: usize) {
        self.bound.origin.column = self.bound.origin.column.saturating_sub(n);
    }

    pub fn move_right(&mut self, n: usize) {
        self.bound.origin.column = self
            .bound
            .origin
            .column
            .saturating_add(n)
            .min(self.max_column());
    }

    pub fn page_forward(&mut self) {
        self.move_down(self.bound.size.line);
    }

    pub fn page_backward(&mut self) {
        self.move_up(self.bound.size.line);
    }

    pub fn half_page_forward(&mut self) {
        self.move_down(self.bound.size.line / 2);
    }

    pub fn half_page_backward(&mut self) {
        self.move_up(self.bound.size.line / 2);
    }

    pub fn go_top(&mut self) {
        self.bound.origin.line = 0;
    }

    pub fn go_bottom(&mut self) {
        self.bound.origin.line = self.max_line();
    }
}
