//! Browser glue for object URLs and file downloads.
//!
//! Everything here is a no-op off the wasm target so the workspace builds
//! and tests on the host.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;

    /// Create a transient object URL for the given bytes.
    pub fn create_object_url(bytes: &[u8], mime: &str) -> Option<String> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob =
            web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }

    /// Release an object URL created by [`create_object_url`].
    pub fn revoke_object_url(url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }

    /// Save bytes through a transient download link. The object URL is
    /// released as soon as the click has been dispatched.
    pub fn download_bytes(bytes: &[u8], file_name: &str) -> bool {
        let Some(url) = create_object_url(bytes, "application/octet-stream") else {
            return false;
        };
        let clicked = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
            .map(|anchor| {
                anchor.set_href(&url);
                anchor.set_download(file_name);
                anchor.click();
            })
            .is_some();
        revoke_object_url(&url);
        clicked
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn create_object_url(_bytes: &[u8], _mime: &str) -> Option<String> {
        None
    }

    pub fn revoke_object_url(_url: &str) {}

    pub fn download_bytes(_bytes: &[u8], _file_name: &str) -> bool {
        false
    }
}

pub(crate) use imp::{create_object_url, download_bytes, revoke_object_url};
