//! Search input debounce
//!
//! Raw keystrokes are buffered here and committed to the catalog query only
//! after the input has been quiet for the debounce window. Every method takes
//! the current `Instant` so tests drive a fabricated clock instead of
//! sleeping.

use std::time::{Duration, Instant};

/// Quiet period required before a buffered edit is committed
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            pending: None,
            deadline: None,
        }
    }

    /// Buffer a new edit and restart the quiet window
    pub fn input(&mut self, text: String, now: Instant) {
        self.pending = Some(text);
        self.deadline = Some(now + SEARCH_DEBOUNCE);
    }

    /// Commit the buffered edit if the window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Commit the buffered edit immediately (Enter pressed)
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }

    /// Drop any buffered edit without committing (Esc, teardown)
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_after_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.input("mo".to_string(), start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(300)),
            Some("mo".to_string())
        );

        // Nothing left to commit
        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
    }

    #[test]
    fn test_new_edit_restarts_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.input("m".to_string(), start);
        debouncer.input("mo".to_string(), start + Duration::from_millis(200));

        // Original deadline has passed but the edit restarted the window
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("mo".to_string())
        );
    }

    #[test]
    fn test_rapid_typing_commits_once_with_final_text() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        let mut commits = Vec::new();

        // Keystrokes 100ms apart for one second
        let text = "mouse pad!";
        for i in 0..10 {
            let now = start + Duration::from_millis(i * 100);
            if let Some(committed) = debouncer.poll(now) {
                commits.push(committed);
            }
            debouncer.input(text[..=i as usize].to_string(), now);
        }

        // Advance past the last keystroke's window
        if let Some(committed) = debouncer.poll(start + Duration::from_millis(900 + 300)) {
            commits.push(committed);
        }

        assert_eq!(commits, vec![text.to_string()]);
    }

    #[test]
    fn test_flush_commits_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.input("lamp".to_string(), start);
        assert_eq!(debouncer.flush(), Some("lamp".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_edit() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();

        debouncer.input("lamp".to_string(), start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}
