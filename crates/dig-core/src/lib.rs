//! dig-core - layout and navigation engine for a git history pager
//!
//! This crate holds everything that has invariants: grid geometry, the
//! scrolling text window, the width-aware line clipper, list selection,
//! panel layout and the circular find. It knows nothing about terminals;
//! frontends draw through the [`render::CellSink`] trait.

pub mod find;
pub mod geometry;
pub mod git;
pub mod layout;
pub mod list;
pub mod render;
pub mod window;

pub use find::{find_from, find_record, next_index};
pub use geometry::{Point, Rect};
pub use git::{DiffSource, Direction, GitError, GitRepo, Record};
pub use layout::{PanelAreas, PanelLayout, GUTTER_WIDTH};
pub use list::{ListState, Movement, Step};
pub use render::{char_width, draw_clipped, text_width, CellSink};
pub use window::TextWindow;
