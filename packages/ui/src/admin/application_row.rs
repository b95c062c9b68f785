//! Single application row.

use dioxus::prelude::*;
use interview_core::{Application, ApplicationId, ApplicationStatus};

use super::StatusBadge;

/// Props for ApplicationRow.
#[derive(Props, Clone, PartialEq)]
pub struct ApplicationRowProps {
    /// The application to display.
    pub application: Application,
    /// Callback when the edit action is clicked.
    pub on_edit: EventHandler<Application>,
    /// Callback when the delete action is clicked.
    pub on_delete: EventHandler<Application>,
    /// Callback for the inline status select.
    pub on_status_change: EventHandler<(ApplicationId, ApplicationStatus)>,
    /// Callback when the candidate photo is clicked.
    pub on_preview: EventHandler<String>,
}

/// Table row for a single application.
#[component]
pub fn ApplicationRow(props: ApplicationRowProps) -> Element {
    let app = props.application.clone();
    let short_id = app.id.short().to_string();
    let exam_label = app.exam_type.label();
    let applied_date = app.created_at.format("%d %b %Y").to_string();
    let applied_time = app.created_at.format("%H:%M").to_string();
    let initial = app
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    // Clone for each closure that needs it
    let app_for_status = app.clone();
    let app_for_edit = app.clone();
    let app_for_delete = app.clone();
    let photo_for_preview = app.photo_url.clone();

    rsx! {
        tr { class: "data-row",
            td {
                div { class: "candidate-cell",
                    if let Some(ref url) = app.photo_url {
                        img {
                            class: "candidate-photo",
                            src: "{url}",
                            alt: "{app.name}",
                            onclick: move |_| {
                                if let Some(ref url) = photo_for_preview {
                                    props.on_preview.call(url.clone());
                                }
                            },
                        }
                    } else {
                        div { class: "candidate-avatar", "{initial}" }
                    }
                    div { class: "candidate-names",
                        span { class: "candidate-name", "{app.name}" }
                        span { class: "candidate-id", "ID: {short_id}" }
                    }
                }
            }
            td {
                div { class: "contact-cell",
                    span { "{app.email}" }
                    span { class: "text-muted", "{app.phone}" }
                }
            }
            td {
                div { class: "exam-cell",
                    span { class: "exam-pill", "{exam_label}" }
                    div { class: "exam-marks text-muted",
                        if let Some(ref prelims) = app.prelims_marks {
                            span { "Prelims: {prelims}" }
                        }
                        if let Some(ref mains) = app.mains_marks {
                            span { "Mains: {mains}" }
                        }
                    }
                }
            }
            td {
                div { class: "status-cell",
                    StatusBadge { status: app.status }
                    select {
                        class: "status-select",
                        value: "{app.status}",
                        onchange: move |e| {
                            // The select only offers closed variants; the
                            // parse is the boundary check.
                            if let Ok(status) = e.value().parse::<ApplicationStatus>() {
                                props.on_status_change.call((app_for_status.id.clone(), status));
                            }
                        },
                        for status in ApplicationStatus::ALL {
                            option {
                                value: status.as_str(),
                                selected: status == app.status,
                                {status.label()}
                            }
                        }
                    }
                }
            }
            td {
                div { class: "applied-cell",
                    span { "{applied_date}" }
                    span { class: "text-muted", "{applied_time}" }
                }
            }
            td { class: "text-right",
                div { class: "row-actions",
                    button {
                        class: "btn btn-small btn-edit",
                        onclick: move |_| props.on_edit.call(app_for_edit.clone()),
                        "Edit"
                    }
                    button {
                        class: "btn btn-small btn-delete",
                        onclick: move |_| props.on_delete.call(app_for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
