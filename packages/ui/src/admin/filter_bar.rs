//! Search, filter and action bar for the applications table.

use dioxus::prelude::*;
use interview_core::{ApplicationStatus, ExamType, ExportFormat, QueryState};

/// Filter controls plus the refresh/stats/export actions.
///
/// Select values arrive as strings and are validated back into the closed
/// enums here; anything unparseable (the "all" sentinel included) becomes
/// the unfiltered state.
#[component]
pub fn FilterBar(
    query: QueryState,
    stats_visible: bool,
    on_search: EventHandler<String>,
    on_status: EventHandler<Option<ApplicationStatus>>,
    on_exam: EventHandler<Option<ExamType>>,
    on_refresh: EventHandler<()>,
    on_toggle_stats: EventHandler<()>,
    on_export: EventHandler<ExportFormat>,
) -> Element {
    let search_value = query.search().to_string();
    let status_value = query
        .status()
        .map(|status| status.as_str().to_string())
        .unwrap_or_else(|| "all".to_string());
    let exam_value = query
        .exam()
        .map(|exam| exam.as_str().to_string())
        .unwrap_or_else(|| "all".to_string());

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-bar-filters",
                input {
                    class: "filter-search",
                    r#type: "text",
                    placeholder: "Search by name, email, or phone...",
                    value: "{search_value}",
                    oninput: move |e| on_search.call(e.value()),
                }

                select {
                    class: "filter-select",
                    value: "{status_value}",
                    onchange: move |e| on_status.call(e.value().parse().ok()),

                    option { value: "all", "All Status" }
                    for status in ApplicationStatus::ALL {
                        option { value: status.as_str(), {status.label()} }
                    }
                }

                select {
                    class: "filter-select",
                    value: "{exam_value}",
                    onchange: move |e| on_exam.call(e.value().parse().ok()),

                    option { value: "all", "All Exams" }
                    for exam in ExamType::ALL {
                        option { value: exam.as_str(), {exam.label()} }
                    }
                }
            }

            div { class: "filter-bar-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_refresh.call(()),
                    "Refresh"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_toggle_stats.call(()),
                    if stats_visible { "Hide Stats" } else { "Show Stats" }
                }

                div { class: "export-menu",
                    button { class: "btn btn-primary", "Export" }
                    div { class: "export-menu-options",
                        for format in ExportFormat::ALL {
                            button {
                                class: "export-menu-option",
                                onclick: move |_| on_export.call(format),
                                {format.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
