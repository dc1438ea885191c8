//! The host platform's history stack, seen from the router.
//!
//! The router reads the current location and writes paths through
//! [`History::push`] and [`History::replace`]. Back/forward movement is
//! owned by the host; the navigator only hears about it afterwards.

/// Access to the host's location and history primitives.
pub trait History {
    /// Current full path, base path included.
    fn location(&self) -> String;

    /// Append a new entry and make it current.
    fn push(&mut self, path: &str);

    /// Overwrite the current entry without growing the stack.
    fn replace(&mut self, path: &str);
}

/// In-process history stack with browser semantics.
///
/// Used by tests and by the `regents-site` tool; pushes drop any forward
/// entries, exactly like `history.pushState`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    pushes: usize,
    replaces: usize,
}

impl MemoryHistory {
    /// A fresh stack holding a single entry, as on page load.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            pushes: 0,
            replaces: 0,
        }
    }

    /// Move one entry back. Returns false at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn push_count(&self) -> usize {
        self.pushes
    }

    pub fn replace_count(&self) -> usize {
        self.replaces
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor += 1;
        self.pushes += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
        self.replaces += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_grows_and_replace_overwrites() {
        let mut history = MemoryHistory::new("/");
        history.push("/apps/biology");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/apps/biology");

        history.replace("/apps/algebra-1");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/apps/algebra-1");
        assert_eq!((history.push_count(), history.replace_count()), (1, 1));
    }

    #[test]
    fn back_and_forward_move_the_cursor() {
        let mut history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");

        assert!(history.back());
        assert_eq!(history.location(), "/a");
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.location(), "/");

        assert!(history.forward());
        assert!(history.forward());
        assert!(!history.forward());
        assert_eq!(history.location(), "/b");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        history.back();
        history.push("/c");

        assert_eq!(history.entries(), ["/", "/a", "/c"]);
        assert!(!history.forward());
    }
}
