//! Playground output console

use chrono::{DateTime, Local};

/// Hint shown while the console is empty
pub const WELCOME: &str = "Write F# code in the editor and press Ctrl-R to run it";

/// One run's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub timestamp: DateTime<Local>,
    pub output: String,
}

impl ConsoleEntry {
    /// Local wall-clock time of the run, e.g. `14:03:27`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Append-only history of runs, oldest first
#[derive(Debug, Clone, Default)]
pub struct Console {
    entries: Vec<ConsoleEntry>,
    /// Lines scrolled up from the bottom
    pub scroll_back: usize,
}

impl Console {
    pub fn push(&mut self, output: impl Into<String>) {
        self.push_at(Local::now(), output);
    }

    pub fn push_at(&mut self, timestamp: DateTime<Local>, output: impl Into<String>) {
        self.entries.push(ConsoleEntry { timestamp, output: output.into() });
        // New output always scrolls to the bottom
        self.scroll_back = 0;
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    /// Whether the welcome hint should be shown
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Back to the welcome state
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_back = 0;
    }
}
