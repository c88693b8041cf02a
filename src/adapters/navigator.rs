use tracing::debug;

use crate::domain::Navigator;

/// Navigator that keeps the visited paths in memory.
///
/// Stands in for a browser history outside the browser: the terminal front
/// end reports where the editor would have gone, and tests assert on it.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    entries: Vec<String>,
}

impl HistoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![start.into()],
        }
    }

    pub fn current(&self) -> &str {
        // `entries` is never empty: `back` keeps the first entry
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str) {
        debug!(from = %self.current(), to = %path, "Navigating");
        self.entries.push(path.to_string());
    }

    fn back(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
        debug!(to = %self.current(), "Navigated back");
    }
}
