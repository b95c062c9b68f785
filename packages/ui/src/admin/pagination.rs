//! Pagination footer for the applications table.

use dioxus::prelude::*;
use interview_core::PageWindow;

/// "Showing X to Y of Z" plus the clamped prev/next controls.
#[component]
pub fn PaginationFooter(
    window: PageWindow,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "pagination-footer",
            div { class: "pagination-summary",
                "Showing "
                span { class: "pagination-strong", "{window.start_index}" }
                " to "
                span { class: "pagination-strong", "{window.end_index}" }
                " of "
                span { class: "pagination-strong", "{window.total}" }
                " applications"
            }
            div { class: "pagination-controls",
                button {
                    class: "btn btn-small",
                    disabled: window.is_first(),
                    onclick: move |_| on_prev.call(()),
                    "‹ Prev"
                }
                span { class: "pagination-page", "{window.page}" }
                button {
                    class: "btn btn-small",
                    disabled: window.is_last(),
                    onclick: move |_| on_next.call(()),
                    "Next ›"
                }
            }
        }
    }
}
