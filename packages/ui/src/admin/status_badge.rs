//! Status badge component.

use dioxus::prelude::*;
use interview_core::ApplicationStatus;

/// Badge for displaying an application's review status.
#[component]
pub fn StatusBadge(status: ApplicationStatus) -> Element {
    let badge_class = match status {
        ApplicationStatus::Pending => "badge-pending",
        ApplicationStatus::Reviewed => "badge-reviewed",
        ApplicationStatus::Scheduled => "badge-scheduled",
        ApplicationStatus::Completed => "badge-completed",
        ApplicationStatus::Rejected => "badge-rejected",
    };

    rsx! {
        span {
            class: "status-badge {badge_class}",
            {status.label()}
        }
    }
}
