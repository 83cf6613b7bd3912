use crate::models::Activity;

pub const PAGE_SIZE: usize = 12;

/// Incremental loader state for the dashboard list. The simulated load
/// latency lives in the coordinator; this struct only owns the count and
/// the loading flag.
#[derive(Debug, Clone)]
pub struct Pager {
    displayed: usize,
    loading: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    pub fn new() -> Self {
        Self {
            displayed: PAGE_SIZE,
            loading: false,
        }
    }

    /// Back to the first page. Invoked on every criteria change.
    pub fn reset(&mut self) {
        self.displayed = PAGE_SIZE;
        self.loading = false;
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn visible_slice<'a>(&self, filtered: &'a [Activity]) -> &'a [Activity] {
        &filtered[..self.displayed.min(filtered.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.displayed < total
    }

    /// Enters the loading state. Returns false while a load is in flight or
    /// when there is nothing more to show.
    pub fn begin_load(&mut self, total: usize) -> bool {
        if self.loading || !self.has_more(total) {
            return false;
        }
        self.loading = true;
        true
    }

    /// Applies a finished load. Completions that arrive after a `reset`
    /// (criteria changed while the latency timer was in flight) are ignored.
    pub fn complete_load(&mut self, total: usize) {
        if !self.loading {
            return;
        }
        self.displayed = (self.displayed + PAGE_SIZE).min(total.max(PAGE_SIZE));
        self.loading = false;
    }
}
