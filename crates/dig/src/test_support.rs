//! Fixtures shared by the app and view tests

use crate::app::App;
use dig_core::{DiffSource, GitError, PanelLayout, Point, Record};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory diff source counting how often it is asked.
pub struct FakeSource {
    bodies: HashMap<String, Vec<String>>,
    fetches: Rc<Cell<usize>>,
}

impl DiffSource for FakeSource {
    fn diff(&self, key: &str) -> Result<Vec<String>, GitError> {
        self.fetches.set(self.fetches.get() + 1);
        self.bodies
            .get(key)
            .cloned()
            .ok_or_else(|| GitError::CommandFailed(format!("bad revision '{key}'")))
    }
}

/// Key used for the record at `idx`.
pub fn key(idx: usize) -> String {
    format!("k{idx}")
}

pub fn records(titles: &[&str]) -> Vec<Record> {
    titles
        .iter()
        .enumerate()
        .map(|(idx, title)| Record::new(key(idx), *title))
        .collect()
}

/// Build an app over `titles`, where record `idx` has body `bodies[idx]`
/// (records past the end of `bodies` fail to fetch).
pub fn make_app(
    titles: &[&str],
    bodies: &[&[&str]],
    size: Point,
    side_width: usize,
) -> (App, Rc<Cell<usize>>) {
    let fetches = Rc::new(Cell::new(0));
    let source = FakeSource {
        bodies: bodies
            .iter()
            .enumerate()
            .map(|(idx, lines)| (key(idx), lines.iter().map(|l| l.to_string()).collect()))
            .collect(),
        fetches: Rc::clone(&fetches),
    };
    let layout = PanelLayout::new(size, side_width, 0);
    let app = App::new(
        PathBuf::from("/repo"),
        records(titles),
        Box::new(source),
        layout,
    );
    (app, fetches)
}

/// Numbered lines `prefix0..prefixN`.
pub fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}
