//! Candidate application form.

use api::{PhotoUpload, PublicApi, SubmissionDraft};
use dioxus::prelude::*;
use interview_core::ExamType;

use crate::browser;

/// Guess the photo's mime type from its file name; the file input only
/// accepts images, so jpeg is a safe fallback.
fn photo_mime(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

/// Modal form collecting candidate details plus a photo.
///
/// Field validation is left to the browser's native required/email/tel
/// constraints; the submit event only fires once those pass. On success the
/// modal closes and the form state dies with it; on failure the form stays
/// populated behind a generic notice.
#[component]
pub fn ApplyForm(on_close: EventHandler<()>) -> Element {
    let public_api = use_context::<PublicApi>();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut exam = use_signal(String::new);
    let mut prelims = use_signal(String::new);
    let mut mains = use_signal(String::new);
    let mut photo = use_signal(|| None::<PhotoUpload>);
    let mut preview_url = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<&'static str>);

    let close = move |_| {
        if let Some(url) = preview_url() {
            browser::revoke_object_url(&url);
        }
        on_close.call(());
    };

    let on_photo_change = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let bytes = bytes.to_vec();
                let mime = photo_mime(&file_name);
                if let Some(old) = preview_url() {
                    browser::revoke_object_url(&old);
                }
                preview_url.set(browser::create_object_url(&bytes, mime));
                photo.set(Some(PhotoUpload {
                    file_name,
                    content_type: mime.to_string(),
                    bytes,
                }));
                error.set(None);
            }
            Err(err) => {
                tracing::error!("failed to read photo: {err}");
                error.set(Some("Could not read the selected photo"));
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        // Native required-file validation blocks submission without a
        // photo before this handler ever runs; this guard is the backstop.
        let Some(photo_file) = photo() else {
            error.set(Some("Please attach a photo"));
            return;
        };
        let Ok(exam_type) = exam().parse::<ExamType>() else {
            error.set(Some("Please choose an examination"));
            return;
        };

        let api = public_api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);

            let draft = SubmissionDraft {
                name: name(),
                phone: phone(),
                email: email(),
                exam_type,
                prelims_marks: prelims(),
                mains_marks: mains(),
            };

            match api.submit_application(&draft, photo_file).await {
                Ok(()) => {
                    if let Some(url) = preview_url() {
                        browser::revoke_object_url(&url);
                    }
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!("application submission failed: {err}");
                    error.set(Some("Submission failed. Please try again."));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-backdrop", onclick: close }
            div { class: "modal modal-wide",
                div { class: "modal-header",
                    h3 { "Candidate Details" }
                    button { class: "modal-close", onclick: close, "×" }
                }

                form { class: "apply-form", onsubmit: on_submit,
                    if let Some(err) = error() {
                        div { class: "error-message", "{err}" }
                    }

                    div { class: "apply-form-grid",
                        div { class: "apply-form-fields",
                            div { class: "form-group",
                                label { "Full Name *" }
                                input {
                                    r#type: "text",
                                    required: true,
                                    placeholder: "Enter your full name",
                                    value: "{name}",
                                    oninput: move |e| name.set(e.value()),
                                }
                            }
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { "Phone *" }
                                    input {
                                        r#type: "tel",
                                        required: true,
                                        placeholder: "10-digit mobile",
                                        value: "{phone}",
                                        oninput: move |e| phone.set(e.value()),
                                    }
                                }
                                div { class: "form-group",
                                    label { "Email *" }
                                    input {
                                        r#type: "email",
                                        required: true,
                                        placeholder: "email@example.com",
                                        value: "{email}",
                                        oninput: move |e| email.set(e.value()),
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { "Examination *" }
                                select {
                                    required: true,
                                    value: "{exam}",
                                    onchange: move |e| exam.set(e.value()),

                                    option { value: "", "Select Exam" }
                                    option { value: "upsc", "UPSC (Civil Services)" }
                                    option { value: "bpsc", "BPSC (State Services)" }
                                }
                            }
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { "Prelims" }
                                    input {
                                        r#type: "text",
                                        placeholder: "Marks",
                                        value: "{prelims}",
                                        oninput: move |e| prelims.set(e.value()),
                                    }
                                }
                                div { class: "form-group",
                                    label { "Mains" }
                                    input {
                                        r#type: "text",
                                        placeholder: "Marks",
                                        value: "{mains}",
                                        oninput: move |e| mains.set(e.value()),
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { "Upload Photo *" }
                                label { class: "upload-area",
                                    span { "Click to upload photo" }
                                    input {
                                        r#type: "file",
                                        required: true,
                                        accept: "image/*",
                                        class: "upload-input",
                                        onchange: on_photo_change,
                                    }
                                }
                            }
                        }

                        div { class: "apply-form-preview",
                            h4 { "Preview" }
                            div { class: "photo-frame",
                                if let Some(url) = preview_url() {
                                    img { src: "{url}", alt: "Candidate" }
                                } else {
                                    span { class: "photo-placeholder", "No photo" }
                                }
                            }
                            if photo().is_some() {
                                span { class: "photo-ready", "Ready" }
                            }
                        }
                    }

                    div { class: "apply-form-footer",
                        p { class: "hint", "Ensure all details match your official documents." }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-large",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Submit Application" }
                        }
                    }
                }
            }
        }
    }
}
