//! Public landing banner with the application call-to-action.

use dioxus::prelude::*;

use crate::ApplyForm;

/// Banner for the mock interview program. The application form opens as a
/// modal behind the call-to-action and owns the whole submission flow.
#[component]
pub fn InterviewBanner() -> Element {
    let mut show_form = use_signal(|| false);

    rsx! {
        section { class: "banner",
            div { class: "banner-card",
                div { class: "banner-copy",
                    span { class: "banner-tag", "Interview Guidance Program 2026" }
                    h2 { class: "banner-title", "Master Your UPSC & BPSC Interview" }
                    p { class: "banner-description",
                        "Face the board with confidence. Get personalized feedback from retired civil servants and subject matter experts."
                    }
                    div { class: "banner-points",
                        span { class: "banner-point", "Expert Panel" }
                        span { class: "banner-point", "Detailed Feedback" }
                    }
                }
                div { class: "banner-cta",
                    button {
                        class: "btn btn-primary btn-large",
                        onclick: move |_| show_form.set(true),
                        "Apply Now"
                    }
                    p { class: "banner-hint", "Limited slots available for this week" }
                }
            }

            if show_form() {
                ApplyForm { on_close: move |_| show_form.set(false) }
            }
        }
    }
}
