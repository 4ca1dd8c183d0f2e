use dig_core::{DiffSource, TextWindow};

/// Diff text of the selected record seen through a [`TextWindow`].
///
/// The body is fetched lazily: [`DetailArea::sync`] only hits the source
/// when the selected key differs from the one last fetched, no matter how
/// many frames are drawn in between.
#[derive(Debug, Default)]
pub struct DetailArea {
    key: Option<String>,
    pub window: TextWindow,
}

impl DetailArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key whose body is currently loaded
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Load the body for `key` if it is not the one already shown.
    /// Returns true when a fetch happened. A failed fetch shows an empty body.
    pub fn sync(&mut self, key: &str, source: &dyn DiffSource) -> bool {
        if self.key.as_deref() == Some(key) {
            return false;
        }
        let text = source.diff(key).unwrap_or_else(|err| {
            tracing::warn!(key, %err, "diff fetch failed");
            Vec::new()
        });
        self.key = Some(key.to_string());
        self.window.reset(text);
        true
    }
}
