use super::{App, Mode};

impl App {
    pub fn start_find(&mut self) {
        self.session.mode = Mode::Find;
        self.session.query.clear();
        self.session.find_missed = false;
    }

    pub fn push_find_char(&mut self, ch: char) {
        self.session.query.push(ch);
        self.session.find_missed = false;
    }

    pub fn pop_find_char(&mut self) {
        self.session.query.pop();
        self.session.find_missed = false;
    }

    /// Jump to the next match after the current record. Find mode stays on
    /// so confirming again cycles through matches.
    pub fn confirm_find(&mut self) {
        let current = self.screen.list.current();
        match dig_core::find_record(&self.session.records, &self.session.query, current) {
            Some(idx) => {
                tracing::debug!(query = %self.session.query, idx, "find matched");
                self.select(idx);
                self.session.find_missed = false;
            }
            None => self.session.find_missed = true,
        }
    }

    pub fn cancel_find(&mut self) {
        self.session.query.clear();
        self.session.find_missed = false;
        self.session.mode = Mode::Normal;
    }
}
