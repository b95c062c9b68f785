//! Applications table.

use dioxus::prelude::*;
use interview_core::{Application, ApplicationId, ApplicationStatus};

use super::ApplicationRow;

/// Props for ApplicationTable.
#[derive(Props, Clone, PartialEq)]
pub struct ApplicationTableProps {
    /// The current page of applications.
    pub applications: Vec<Application>,
    /// Callback when the edit modal should open.
    pub on_edit: EventHandler<Application>,
    /// Callback when the delete confirmation should open.
    pub on_delete: EventHandler<Application>,
    /// Callback for an inline status change.
    pub on_status_change: EventHandler<(ApplicationId, ApplicationStatus)>,
    /// Callback when a candidate photo is clicked.
    pub on_preview: EventHandler<String>,
}

/// Table of applications for the current page.
#[component]
pub fn ApplicationTable(props: ApplicationTableProps) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Candidate" }
                        th { "Contact" }
                        th { "Exam Details" }
                        th { "Status" }
                        th { "Applied" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for application in props.applications.iter() {
                        ApplicationRow {
                            key: "{application.id}",
                            application: application.clone(),
                            on_edit: props.on_edit,
                            on_delete: props.on_delete,
                            on_status_change: props.on_status_change,
                            on_preview: props.on_preview,
                        }
                    }
                }
            }
        }
    }
}
