//! # Host console buffer contract.
//!
//! [`ConsoleSource`] is the collaborator the host implements over its real
//! log buffer. [`MemoryConsole`] is a plain in-memory implementation used
//! by tests and embedded hosts.

use std::sync::{Mutex, PoisonError};

use super::entry::RawConsoleEntry;

/// Read/clear access to the host's buffered console entries.
pub trait ConsoleSource: Send + Sync {
    /// All buffered entries in native (chronological) order.
    fn entries(&self) -> Vec<RawConsoleEntry>;

    /// Empties the buffer. Unconditional and irreversible.
    fn clear(&self);
}

/// In-memory console buffer.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    entries: Mutex<Vec<RawConsoleEntry>>,
}

impl MemoryConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the chronological end.
    pub fn push(&self, message: impl Into<String>, mode: u32) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RawConsoleEntry::new(message, mode));
    }

    /// Number of buffered entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConsoleSource for MemoryConsole {
    fn entries(&self) -> Vec<RawConsoleEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::entry::MODE_LOG;

    #[test]
    fn push_preserves_chronological_order() {
        let console = MemoryConsole::new();
        console.push("first", MODE_LOG);
        console.push("second", MODE_LOG);

        let entries = console.entries();
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn clear_empties_the_buffer() {
        let console = MemoryConsole::new();
        console.push("gone", MODE_LOG);
        console.clear();
        assert!(console.is_empty());
    }
}
