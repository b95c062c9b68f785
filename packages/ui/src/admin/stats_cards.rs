//! Aggregate stats cards shown above the applications table.

use dioxus::prelude::*;
use interview_core::Stats;

/// Summary cards for the backend's aggregate counts.
#[component]
pub fn StatsCards(stats: Stats) -> Element {
    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                div { class: "stat-card-value", "{stats.total_applications}" }
                div { class: "stat-card-label", "Total Applications" }
            }
            div { class: "stat-card stat-card-pending",
                div { class: "stat-card-value", "{stats.pending_count}" }
                div { class: "stat-card-label", "Pending Review" }
            }
            div { class: "stat-card stat-card-scheduled",
                div { class: "stat-card-value", "{stats.scheduled_count}" }
                div { class: "stat-card-label", "Scheduled" }
            }
            div { class: "stat-card stat-card-completed",
                div { class: "stat-card-value", "{stats.completed_count}" }
                div { class: "stat-card-label", "Completed" }
            }
        }
    }
}
