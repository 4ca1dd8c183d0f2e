use super::{App, Focus};
use dig_core::{Movement, Step};

impl App {
    fn list_height(&self) -> usize {
        self.screen.layout.areas().side.height()
    }

    pub fn select(&mut self, index: usize) {
        let height = self.list_height();
        self.screen
            .list
            .select(index, self.session.records.len(), height);
    }

    pub fn move_focused(&mut self, movement: Movement) {
        match self.session.focus {
            Focus::List => {
                let height = self.list_height();
                self.screen
                    .list
                    .apply(movement, self.session.records.len(), height);
            }
            Focus::Detail => {
                let window = &mut self.screen.detail.window;
                match movement {
                    Movement::Forward(Step::Line) => window.move_down(1),
                    Movement::Backward(Step::Line) => window.move_up(1),
                    Movement::Forward(Step::Page) => window.page_forward(),
                    Movement::Backward(Step::Page) => window.page_backward(),
                    Movement::Forward(Step::HalfPage) => window.half_page_forward(),
                    Movement::Backward(Step::HalfPage) => window.half_page_backward(),
                    Movement::First => window.go_top(),
                    Movement::Last => window.go_bottom(),
                }
            }
        }
    }

    // Horizontal scrolling only exists in the diff, whatever has focus.
    pub fn scroll_left(&mut self) {
        self.screen.detail.window.move_left(self.horizontal_step);
    }

    pub fn scroll_right(&mut self) {
        self.screen.detail.window.move_right(self.horizontal_step);
    }

    pub fn toggle_focus(&mut self) {
        match self.session.focus {
            Focus::List => self.session.focus = Focus::Detail,
            Focus::Detail => self.focus_list(),
        }
    }

    /// Focus the list, bringing the side panel back if it was hidden.
    pub fn focus_list(&mut self) {
        self.session.focus = Focus::List;
        if self.screen.layout.side_hidden() {
            self.show_side(true);
        }
    }

    pub fn show_side(&mut self, show: bool) {
        self.screen.layout.show_side(show);
        if !show {
            self.session.focus = Focus::Detail;
        }
        self.sync_geometry();
    }

    pub fn toggle_side(&mut self) {
        let hidden = self.screen.layout.side_hidden();
        self.show_side(hidden);
    }

    pub fn expand_side(&mut self, delta: isize) {
        self.screen.layout.expand_side(delta);
        self.sync_geometry();
    }
}
