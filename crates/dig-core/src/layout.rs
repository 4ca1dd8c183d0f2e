//! Panel geometry for the side/main/status layout

use crate::geometry::{Point, Rect};

/// Columns between the side panel and the main area while the side is shown.
pub const GUTTER_WIDTH: usize = 1;

/// Rectangles derived from a [`PanelLayout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelAreas {
    pub side: Rect,
    pub gutter: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Terminal size, side panel widths and visibility.
///
/// Areas are always recomputed from scratch by [`PanelLayout::resize`];
/// every mutator ends by calling it so derived rectangles never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    size: Point,
    side_width_visible: usize,
    side_width_hidden: usize,
    hidden: bool,
    areas: PanelAreas,
}

impl PanelLayout {
    pub fn new(size: Point, side_width_visible: usize, side_width_hidden: usize) -> Self {
        let mut layout = Self {
            size,
            side_width_visible,
            side_width_hidden,
            hidden: false,
            areas: PanelAreas::default(),
        };
        layout.resize(size);
        layout
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn areas(&self) -> PanelAreas {
        self.areas
    }

    pub fn side_hidden(&self) -> bool {
        self.hidden
    }

    pub fn side_width_visible(&self) -> usize {
        self.side_width_visible
    }

    pub fn side_width_hidden(&self) -> usize {
        self.side_width_hidden
    }

    /// Recompute every area for a terminal of `size` (height, width).
    pub fn resize(&mut self, size: Point) {
        self.size = size;
        let total_width = size.column;
        let body_height = size.line.saturating_sub(1);

        let configured = if self.hidden {
            self.side_width_hidden
        } else {
            self.side_width_visible
        };
        let side_width = configured.min(total_width);
        let gutter_width = if !self.hidden && side_width > 0 {
            GUTTER_WIDTH.min(total_width - side_width)
        } else {
            0
        };
        let main_column = side_width + gutter_width;

        self.areas = PanelAreas {
            side: Rect::new(Point::new(0, 0), Point::new(body_height, side_width)),
            gutter: Rect::new(
                Point::new(0, side_width),
                Point::new(body_height, gutter_width),
            ),
            main: Rect::new(
                Point::new(0, main_column),
                Point::new(body_height, total_width - main_column),
            ),
            status: Rect::new(
                Point::new(body_height, 0),
                Point::new(size.line.min(1), total_width),
            ),
        };
    }

    pub fn show_side(&mut self, show: bool) {
        self.hidden = !show;
        self.resize(self.size);
    }

    pub fn toggle_side(&mut self) {
        self.show_side(self.hidden);
    }

    /// Grow (or shrink, for negative `delta`) the width used in the current
    /// visibility state, never below zero.
    pub fn expand_side(&mut self, delta: isize) {
        let width = if self.hidden {
            &mut self.side_width_hidden
        } else {
            &mut self.side_width_visible
        };
        *width = width.saturating_add_signed(delta);
        self.resize(self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let layout = PanelLayout::new(Point::new(24, 80), 20, 0);
        let areas = layout.areas();
        assert_eq!(areas.side, Rect::new(Point::new(0, 0), Point::new(23, 20)));
        assert_eq!(areas.gutter, Rect::new(Point::new(0, 20), Point::new(23, 1)));
        assert_eq!(areas.main, Rect::new(Point::new(0, 21), Point::new(23, 59)));
        assert_eq!(areas.status, Rect::new(Point::new(23, 0), Point::new(1, 80)));
    }

    #[test]
    fn test_narrow_terminal_gives_main_zero_width() {
        let layout = PanelLayout::new(Point::new(10, 12), 20, 0);
        let areas = layout.areas();
        assert_eq!(areas.side.width(), 12);
        assert_eq!(areas.gutter.width(), 0);
        assert_eq!(areas.main.width(), 0);
        assert_eq!(areas.main.origin.column, 12);
    }

    #[test]
    fn test_gutter_squeezed_before_main() {
        let layout = PanelLayout::new(Point::new(10, 21), 20, 0);
        let areas = layout.areas();
        assert_eq!(areas.gutter.width(), 1);
        assert_eq!(areas.main.width(), 0);
    }

    #[test]
    fn test_hidden_side_gives_main_full_width() {
        let mut layout = PanelLayout::new(Point::new(24, 80), 20, 0);
        layout.show_side(false);
        let areas = layout.areas();
        assert!(areas.side.is_empty());
        assert_eq!(areas.gutter.width(), 0);
        assert_eq!(areas.main, Rect::new(Point::new(0, 0), Point::new(23, 80)));
    }

    #[test]
    fn test_toggle_twice_restores_areas() {
        let mut layout = PanelLayout::new(Point::new(30, 100), 25, 3);
        let before = layout.areas();
        layout.toggle_side();
        assert_ne!(layout.areas(), before);
        layout.toggle_side();
        assert_eq!(layout.areas(), before);
    }

    #[test]
    fn test_expand_side_clamps_at_zero() {
        let mut layout = PanelLayout::new(Point::new(24, 80), 2, 0);
        layout.expand_side(1);
        assert_eq!(layout.side_width_visible(), 3);
        layout.expand_side(-10);
        assert_eq!(layout.side_width_visible(), 0);
        assert_eq!(layout.areas().main.width(), 80);
    }

    #[test]
    fn test_expand_side_while_hidden_changes_hidden_width() {
        let mut layout = PanelLayout::new(Point::new(24, 80), 20, 0);
        layout.show_side(false);
        layout.expand_side(4);
        assert_eq!(layout.side_width_hidden(), 4);
        assert_eq!(layout.side_width_visible(), 20);
        assert_eq!(layout.areas().side.width(), 4);
        assert_eq!(layout.areas().main.origin.column, 4);
    }

    #[test]
    fn test_zero_height_terminal() {
        let layout = PanelLayout::new(Point::new(0, 40), 10, 0);
        let areas = layout.areas();
        assert!(areas.side.is_empty());
        assert!(areas.main.is_empty());
        assert!(areas.status.is_empty());
    }
}
