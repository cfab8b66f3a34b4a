//! Fixed-capacity rolling history of trace entries.

use std::collections::VecDeque;

use crate::data::entry::BufferEntry;

/// Number of entries the scope keeps, and therefore the widest window the
/// display can show.
pub const HISTORY_CAPACITY: usize = 4000;

/// Rolling window over the most recent entries.
///
/// The buffer is pre-filled with zero entries at creation and its length is
/// exactly its capacity at every observable point: each push drops as many
/// of the oldest entries as it appends.
#[derive(Debug)]
pub struct HistoryBuffer {
    entries: VecDeque<BufferEntry>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let mut entries = VecDeque::with_capacity(capacity);
        entries.resize(capacity, BufferEntry::default());
        Self { entries, capacity }
    }

    /// Append a batch, dropping the same number of oldest entries.
    ///
    /// A batch at least as long as the capacity replaces the whole buffer
    /// with the batch's last `capacity` items, in order.
    pub fn push(&mut self, items: &[BufferEntry]) {
        if items.len() >= self.capacity {
            self.entries.clear();
            self.entries
                .extend(items[items.len() - self.capacity..].iter().copied());
        } else {
            for _ in 0..items.len() {
                self.entries.pop_front();
            }
            self.entries.extend(items.iter().copied());
        }
    }

    /// Always equal to the capacity.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, idx: usize) -> Option<&BufferEntry> {
        self.entries.get(idx)
    }

    /// Display value of entry `idx`. Panics when out of range.
    pub fn value_at(&self, idx: usize) -> f64 {
        self.entries[idx].value()
    }

    /// Entries in order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BufferEntry> {
        self.entries.iter()
    }

    /// Owned copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<BufferEntry> {
        self.entries.iter().copied().collect()
    }
}
