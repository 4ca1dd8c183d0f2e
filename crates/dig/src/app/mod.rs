//! Application state and logic

use crate::config::Theme;
use crate::input::Action;
use dig_core::{DiffSource, ListState, PanelLayout, Point, Record};
use std::path::PathBuf;

mod detail;
mod find;
mod navigation;
mod types;

pub use detail::DetailArea;
pub use types::{Focus, LineKind, Mode};

/// Per-session state shared by every area
pub struct Session {
    /// Absolute repository path, also the persisted-state key
    pub repo: PathBuf,
    /// Records in display order; never empty, never mutated after startup
    pub records: Vec<Record>,
    pub mode: Mode,
    pub focus: Focus,
    /// Find query typed so far
    pub query: String,
    /// Last find confirm came up empty
    pub find_missed: bool,
}

/// Areas and the geometry they are placed with
pub struct Screen {
    pub layout: PanelLayout,
    pub list: ListState,
    pub detail: DetailArea,
}

/// The main application state
pub struct App {
    pub session: Session,
    pub screen: Screen,
    /// Resolved theme colors
    pub theme: Theme,
    /// Columns per horizontal scroll step
    pub horizontal_step: usize,
    /// Whether to quit
    pub should_quit: bool,
    source: Box<dyn DiffSource>,
}

impl App {
    pub fn new(
        repo: PathBuf,
        records: Vec<Record>,
        source: Box<dyn DiffSource>,
        layout: PanelLayout,
    ) -> Self {
        let mut app = Self {
            session: Session {
                repo,
                records,
                mode: Mode::Normal,
                focus: Focus::List,
                query: String::new(),
                find_missed: false,
            },
            screen: Screen {
                layout,
                list: ListState::new(),
                detail: DetailArea::new(),
            },
            theme: Theme::default(),
            horizontal_step: 4,
            should_quit: false,
            source,
        };
        if app.screen.layout.side_hidden() {
            app.session.focus = Focus::Detail;
        }
        app.sync_geometry();
        app
    }

    /// Selected record. The record list is never empty.
    pub fn current_record(&self) -> &Record {
        &self.session.records[self.screen.list.current()]
    }

    /// Apply one action to completion.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Move(movement) => self.move_focused(movement),
            Action::ScrollLeft => self.scroll_left(),
            Action::ScrollRight => self.scroll_right(),
            Action::ToggleFocus => self.toggle_focus(),
            Action::FocusList => self.focus_list(),
            Action::ExpandSide(delta) => self.expand_side(delta),
            Action::ToggleSide => self.toggle_side(),
            Action::StartFind => self.start_find(),
            Action::FindPush(ch) => self.push_find_char(ch),
            Action::FindPop => self.pop_find_char(),
            Action::FindConfirm => self.confirm_find(),
            Action::FindCancel => self.cancel_find(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Recompute all geometry for a terminal of `size` (height, width).
    pub fn resize(&mut self, size: Point) {
        self.screen.layout.resize(size);
        self.sync_geometry();
    }

    /// Push layout rectangles down into the areas that depend on them.
    fn sync_geometry(&mut self) {
        let areas = self.screen.layout.areas();
        self.screen.detail.window.set_size(areas.main.size);
        self.screen.list.fit(areas.side.height());
    }

    /// Make sure the detail area shows the body of the current record.
    pub fn sync_detail(&mut self) -> bool {
        let key = &self.session.records[self.screen.list.current()].key;
        self.screen.detail.sync(key, self.source.as_ref())
    }
}
