use std::collections::HashMap;

/// Visit counts for the URLs requested during one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    counts: HashMap<String, u32>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, url: &str) -> u32 {
        self.counts.get(url).copied().unwrap_or(0)
    }

    /// Records a visit and returns `false` if the URL had been seen before.
    pub fn record(&mut self, url: &str) -> bool {
        let count = self.counts.entry(url.to_string()).or_insert(0);
        *count += 1;
        *count == 1
    }
}
