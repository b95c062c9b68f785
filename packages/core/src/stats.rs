//! Aggregate counts computed by the backend.

use serde::{Deserialize, Serialize};

use crate::query::PageWindow;

/// Backend-computed aggregate counts over all applications, independent of
/// pagination. Read-only mirror on the client; absent counts decode as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub total_applications: u64,
    pub pending_count: u64,
    pub scheduled_count: u64,
    pub completed_count: u64,
}

impl Stats {
    /// Pagination window for the given page over the total count.
    pub fn page_window(&self, page: u32) -> PageWindow {
        PageWindow::new(self.total_applications, page)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{
            "totalApplications": 23,
            "pendingCount": 9,
            "scheduledCount": 5,
            "completedCount": 4
        }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_applications, 23);
        assert_eq!(stats.pending_count, 9);
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let stats: Stats = serde_json::from_str(r#"{"totalApplications": 7}"#).unwrap();
        assert_eq!(stats.total_applications, 7);
        assert_eq!(stats.pending_count, 0);
        assert_eq!(stats.scheduled_count, 0);
        assert_eq!(stats.completed_count, 0);
    }

    #[test]
    fn page_window_uses_total_applications() {
        let stats = Stats {
            total_applications: 23,
            ..Stats::default()
        };
        assert_eq!(stats.page_window(3).total_pages, 3);
        assert_eq!(stats.page_window(1).end_index, 10);
    }
}
