//! Dashboard query state and pagination math.

use crate::application::{ApplicationStatus, ExamType};

/// Fixed page size for the applications table.
pub const PAGE_SIZE: u32 = 10;

/// The client-held combination of search term, status filter, exam filter
/// and page number driving the next fetch.
///
/// Fields are private so the page-reset invariant cannot be bypassed: any
/// change to a filter puts the query back on page 1, which is why a filter
/// change produces exactly one fetch rather than a filter fetch followed by
/// a page-reset fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    status: Option<ApplicationStatus>,
    exam: Option<ExamType>,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            exam: None,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current status filter; `None` means "all".
    pub fn status(&self) -> Option<ApplicationStatus> {
        self.status
    }

    /// Current exam filter; `None` means "all".
    pub fn exam(&self) -> Option<ExamType> {
        self.exam
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<ApplicationStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_exam(&mut self, exam: Option<ExamType>) {
        self.exam = exam;
        self.page = 1;
    }

    /// Step back one page, clamped at page 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Step forward one page, clamped at `total_pages`.
    pub fn next_page(&mut self, total_pages: u32) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Query parameters for the list endpoint.
    ///
    /// Page and limit are always present; the search term is trimmed and
    /// omitted when blank; "all" filters are omitted entirely.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(exam) = self.exam {
            params.push(("examType", exam.as_str().to_string()));
        }
        params
    }
}

/// Derived pagination view for a page of `total` applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    /// 1-based inclusive index of the first row on this page.
    pub start_index: u64,
    /// 1-based inclusive index of the last row on this page.
    pub end_index: u64,
}

impl PageWindow {
    pub fn new(total: u64, page: u32) -> Self {
        let total_pages = total.div_ceil(u64::from(PAGE_SIZE)).max(1) as u32;
        let start_index = u64::from(page - 1) * u64::from(PAGE_SIZE) + 1;
        let end_index = (u64::from(page) * u64::from(PAGE_SIZE)).min(total);
        Self {
            total,
            page,
            total_pages,
            start_index,
            end_index,
        }
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Monotonically increasing fetch cycle counter.
///
/// Overlapping fetches are not cancelled; instead each cycle takes a number
/// from this sequence and only the response carrying the latest issued
/// number may be applied to visible state. A completion that is no longer
/// latest is dropped wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next fetch cycle.
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether `seq` is still the most recently issued cycle.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_page_to_one() {
        let mut query = QueryState::new();
        query.next_page(5);
        query.next_page(5);
        assert_eq!(query.page(), 3);

        query.set_search("asha");
        assert_eq!(query.page(), 1);

        query.next_page(5);
        query.set_status(Some(ApplicationStatus::Scheduled));
        assert_eq!(query.page(), 1);

        query.next_page(5);
        query.set_exam(Some(ExamType::Bpsc));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn page_navigation_clamps_at_boundaries() {
        let mut query = QueryState::new();
        query.prev_page();
        assert_eq!(query.page(), 1);

        query.next_page(3);
        query.next_page(3);
        assert_eq!(query.page(), 3);
        query.next_page(3);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn next_page_with_empty_list_stays_on_page_one() {
        let mut query = QueryState::new();
        query.next_page(PageWindow::new(0, 1).total_pages);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        assert_eq!(PageWindow::new(0, 1).total_pages, 1);
        assert_eq!(PageWindow::new(1, 1).total_pages, 1);
        assert_eq!(PageWindow::new(10, 1).total_pages, 1);
        assert_eq!(PageWindow::new(11, 1).total_pages, 2);
        assert_eq!(PageWindow::new(25, 1).total_pages, 3);
    }

    #[test]
    fn window_bounds_match_page() {
        let window = PageWindow::new(25, 3);
        assert_eq!(window.start_index, 21);
        assert_eq!(window.end_index, 25);
    }

    #[test]
    fn showing_range_for_twenty_three_applications_page_three() {
        // 23 applications on page 3 reads "21 to 23 of 23", with three
        // pages and the next button disabled.
        let window = PageWindow::new(23, 3);
        assert_eq!(window.start_index, 21);
        assert_eq!(window.end_index, 23);
        assert_eq!(window.total, 23);
        assert_eq!(window.total_pages, 3);
        assert!(window.is_last());
        assert!(!window.is_first());
    }

    #[test]
    fn default_params_carry_page_and_limit_only() {
        let query = QueryState::new();
        assert_eq!(
            query.params(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn params_include_set_filters_and_trimmed_search() {
        let mut query = QueryState::new();
        query.set_search("  asha  ");
        query.set_status(Some(ApplicationStatus::Pending));
        query.set_exam(Some(ExamType::Upsc));

        let params = query.params();
        assert!(params.contains(&("search", "asha".to_string())));
        assert!(params.contains(&("status", "pending".to_string())));
        assert!(params.contains(&("examType", "upsc".to_string())));
    }

    #[test]
    fn blank_search_is_omitted() {
        let mut query = QueryState::new();
        query.set_search("   ");
        let params = query.params();
        assert!(!params.iter().any(|(key, _)| *key == "search"));
    }

    #[test]
    fn stale_fetch_is_not_latest() {
        let mut seq = FetchSequence::new();
        let first = seq.next();
        let second = seq.next();

        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));

        let third = seq.next();
        assert!(seq.is_latest(third));
        assert!(!seq.is_latest(second));
    }
}
