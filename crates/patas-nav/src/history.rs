//! Browser-style history
//!
//! A linear entry list with a cursor. Pushing after going back truncates the
//! forward entries, matching host history semantics. Back/forward moves hand
//! the current route key back to the caller, which re-runs the content load.

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Push a route key as the newest entry, dropping any forward entries.
    pub fn push(&mut self, route: &str) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(route.to_string());
        self.cursor = Some(self.entries.len() - 1);

        tracing::debug!(route, entries = self.entries.len(), "History push");
    }

    /// Route key at the cursor.
    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }

    /// Move back one entry, returning the new current route.
    pub fn back(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Move forward one entry, returning the new current route.
    pub fn forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_current() {
        let mut history = History::new();
        assert_eq!(history.current(), None);

        history.push("index.html");
        history.push("register.html");

        assert_eq!(history.current(), Some("register.html"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        history.push("index.html");
        history.push("project.html");
        history.push("register.html");

        assert_eq!(history.back(), Some("project.html"));
        assert_eq!(history.back(), Some("index.html"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), Some("index.html"));

        assert_eq!(history.forward(), Some("project.html"));
        assert_eq!(history.forward(), Some("register.html"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new();
        history.push("index.html");
        history.push("project.html");
        history.push("register.html");

        history.back();
        history.back();
        history.push("register.html");

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("register.html"));
        assert_eq!(history.forward(), None);
    }
}
