//! Edit application modal.

use dioxus::prelude::*;
use interview_core::{Application, ApplicationStatus};

/// Edit form over a copy of the selected application.
///
/// The draft starts as a clone of the row that opened the modal and the
/// whole edited record goes back on save; the modal stays open until the
/// parent confirms the update landed.
#[component]
pub fn EditModal(
    application: Application,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<Application>,
) -> Element {
    let mut draft = use_signal(move || application);

    let current = draft();
    let prelims_value = current.prelims_marks.clone().unwrap_or_default();
    let mains_value = current.mains_marks.clone().unwrap_or_default();
    let notes_value = current.notes.clone().unwrap_or_default();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()) }
            div { class: "modal modal-wide",
                div { class: "modal-header",
                    h3 { "Edit Application" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_cancel.call(()),
                        "×"
                    }
                }

                div { class: "modal-body",
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Full Name" }
                            input {
                                r#type: "text",
                                value: "{current.name}",
                                oninput: move |e| draft.write().name = e.value(),
                            }
                        }
                        div { class: "form-group",
                            label { "Email" }
                            input {
                                r#type: "email",
                                value: "{current.email}",
                                oninput: move |e| draft.write().email = e.value(),
                            }
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Phone" }
                            input {
                                r#type: "tel",
                                value: "{current.phone}",
                                oninput: move |e| draft.write().phone = e.value(),
                            }
                        }
                        div { class: "form-group",
                            label { "Status" }
                            select {
                                value: "{current.status}",
                                onchange: move |e| {
                                    if let Ok(status) = e.value().parse::<ApplicationStatus>() {
                                        draft.write().status = status;
                                    }
                                },
                                for status in ApplicationStatus::ALL {
                                    option {
                                        value: status.as_str(),
                                        selected: status == current.status,
                                        {status.label()}
                                    }
                                }
                            }
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Prelims Marks" }
                            input {
                                r#type: "number",
                                value: "{prelims_value}",
                                oninput: move |e| {
                                    let value = e.value();
                                    draft.write().prelims_marks =
                                        (!value.trim().is_empty()).then_some(value);
                                },
                            }
                        }
                        div { class: "form-group",
                            label { "Mains Marks" }
                            input {
                                r#type: "number",
                                value: "{mains_value}",
                                oninput: move |e| {
                                    let value = e.value();
                                    draft.write().mains_marks =
                                        (!value.trim().is_empty()).then_some(value);
                                },
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "Notes" }
                        textarea {
                            rows: 3,
                            placeholder: "Add any notes about this candidate...",
                            value: "{notes_value}",
                            oninput: move |e| {
                                let value = e.value();
                                draft.write().notes = (!value.trim().is_empty()).then_some(value);
                            },
                        }
                    }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_save.call(draft()),
                        "Save Changes"
                    }
                }
            }
        }
    }
}
