use crate::controller::SearchState;
use crate::params::PER_PAGE;

/// Derived state of the previous/next controls and the range label.
///
/// There is no total count in the API response, so a short page is taken to
/// mean there is nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    /// Offset of the first result on this page
    pub start: usize,
    /// Offset one past the last result on this page
    pub end: usize,
}

impl Pagination {
    pub fn new(page: u32, result_count: usize, loading: bool) -> Self {
        let page = page.max(1);
        let per_page = PER_PAGE as usize;
        let start = (page as usize - 1) * per_page;

        Self {
            page,
            previous_disabled: page == 1 || loading,
            next_disabled: result_count < per_page || loading,
            start,
            end: start + result_count.min(per_page),
        }
    }

    pub fn of(state: &SearchState) -> Self {
        Self::new(state.page, state.results.len(), state.loading)
    }

    /// Range label, e.g. `"20 - 27"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// Target page of the "previous" control, if it is enabled
    pub fn previous_page(&self) -> Option<u32> {
        (!self.previous_disabled).then(|| self.page - 1)
    }

    /// Target page of the "next" control, if it is enabled and there is a
    /// page number left to go to
    pub fn next_page(&self) -> Option<u32> {
        if self.next_disabled {
            return None;
        }
        self.page.checked_add(1)
    }
}
