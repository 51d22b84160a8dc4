mod types;

pub use types::{CommandStatus, HistoryEntry};

/// Ordered record of every dispatched command.
///
/// Unbounded by default. With a ceiling set, the oldest entries are dropped once the
/// log grows past it.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    max_entries: Option<usize>,
}

impl History {
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn append(&mut self, command: &str, status: CommandStatus) {
        self.entries.push(HistoryEntry::new(command, status));
        self.trim_entries();
    }

    /// Entries in the order they were recorded.
    pub fn list(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim_entries(&mut self) {
        if let Some(max) = self.max_entries {
            if self.entries.len() > max {
                let excess = self.entries.len() - max;
                self.entries.drain(..excess);
            }
        }
    }
}
