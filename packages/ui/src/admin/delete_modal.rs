//! Delete confirmation modal.

use dioxus::prelude::*;
use interview_core::Application;

/// Confirmation dialog before an application is deleted.
#[component]
pub fn DeleteModal(
    application: Application,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<Application>,
) -> Element {
    let app_for_confirm = application.clone();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()) }
            div { class: "modal modal-narrow",
                div { class: "modal-body modal-body-centered",
                    h3 { "Delete Application" }
                    p { class: "text-muted",
                        "Are you sure you want to delete "
                        strong { "{application.name}" }
                        "'s application? This action cannot be undone."
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-delete",
                        onclick: move |_| on_confirm.call(app_for_confirm.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
