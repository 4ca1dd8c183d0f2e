//! Grid coordinates shared by every area

use std::ops::Add;

/// A cell position, or a size when used as [`Rect::size`].
///
/// `line` grows downward, `column` grows rightward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            line: self.line + other.line,
            column: self.column + other.column,
        }
    }
}

/// An origin plus a size (height in `line`, width in `column`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    pub const fn new(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    pub fn height(&self) -> usize {
        self.size.line
    }

    pub fn width(&self) -> usize {
        self.size.column
    }

    /// Zero width or zero height; nothing is drawn into an empty rect.
    pub fn is_empty(&self) -> bool {
        self.size.line == 0 || self.size.column == 0
    }

    /// One past the bottom-right cell.
    pub fn end(&self) -> Point {
        self.origin + self.size
    }
}
