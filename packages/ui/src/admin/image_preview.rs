//! Full-screen candidate photo preview.

use dioxus::prelude::*;

/// Overlay showing a candidate photo at full size. Clicking anywhere
/// outside the image closes it.
#[component]
pub fn ImagePreview(url: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "image-preview-overlay",
            onclick: move |_| on_close.call(()),
            img {
                class: "image-preview",
                src: "{url}",
                alt: "Preview",
                onclick: move |e| e.stop_propagation(),
            }
        }
    }
}
