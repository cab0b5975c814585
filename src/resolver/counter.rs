use std::collections::HashMap;

/// Per-key occurrence counts for one resolution pass
#[derive(Debug, Default)]
pub struct OccurrenceCounter {
    counts: HashMap<String, usize>,
}

impl OccurrenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record another occurrence of `key` and return its 1-based count
    pub fn next(&mut self, key: &str) -> usize {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}
