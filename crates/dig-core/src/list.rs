//! Selection and scroll state for the record list

/// How far a single movement goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Line,
    Page,
    HalfPage,
}

impl Step {
    fn distance(self, viewport_height: usize) -> usize {
        match self {
            Step::Line => 1,
            Step::Page => viewport_height,
            Step::HalfPage => viewport_height / 2,
        }
    }
}

/// A selection movement over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward(Step),
    Backward(Step),
    First,
    Last,
}

/// Current selection plus the first visible row.
///
/// After every mutation `top <= current < top + viewport_height` holds
/// (for a viewport of at least one row). Scrolling is minimal: the window
/// moves just enough to bring the selection into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    current: usize,
    top: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Apply a movement over a list of `len` items.
    pub fn apply(&mut self, movement: Movement, len: usize, viewport_height: usize) {
        let next = match movement {
            Movement::Forward(step) => self
                .current
                .saturating_add(step.distance(viewport_height)),
            Movement::Backward(step) => self
                .current
                .saturating_sub(step.distance(viewport_height)),
            Movement::First => 0,
            Movement::Last => len.saturating_sub(1),
        };
        self.select(next, len, viewport_height);
    }

    /// Jump to `index`, clamped to the last valid item.
    pub fn select(&mut self, index: usize, len: usize, viewport_height: usize) {
        self.current = index.min(len.saturating_sub(1));
        self.fit(viewport_height);
    }

    /// Re-establish the visibility invariant, e.g. after a resize.
    pub fn fit(&mut self, viewport_height: usize) {
        if self.current < self.top {
            self.top = self.current;
        } else if viewport_height == 0 {
            self.top = self.current;
        } else if self.current >= self.top + viewport_height {
            self.top = self.current + 1 - viewport_height;
        }
    }

    /// Indices of the rows that fall in the viewport.
    pub fn visible_range(&self, len: usize, viewport_height: usize) -> std::ops::Range<usize> {
        let start = self.top.min(len);
        let end = start.saturating_add(viewport_height).min(len);
        start..end
    }
}
