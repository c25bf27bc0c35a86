/// Offset window selected by relay connection arguments.
///
/// Cursors are zero-based positions in the id-ordered result set; `after`
/// and `before` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    total: usize,
}

impl PageWindow {
    pub fn resolve(
        total: usize,
        after: Option<usize>,
        before: Option<usize>,
        first: Option<usize>,
        last: Option<usize>,
    ) -> Self {
        let mut start = after.map(|a| a.saturating_add(1)).unwrap_or(0).min(total);
        let mut end = before.unwrap_or(total).min(total).max(start);

        if let Some(first) = first {
            end = end.min(start.saturating_add(first));
        }
        if let Some(last) = last {
            start = start.max(end.saturating_sub(last));
        }

        Self { start, end, total }
    }

    pub fn offset(&self) -> u64 {
        self.start as u64
    }

    pub fn limit(&self) -> u64 {
        (self.end - self.start) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_previous_page(&self) -> bool {
        self.start > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.end < self.total
    }
}
