//! Admin login page.

use api::{AdminApi, Credentials};
use dioxus::prelude::*;

/// Login form for the admin surface. A successful login stores the token in
/// the shared session and moves on to the dashboard.
#[component]
pub fn AdminLoginPage() -> Element {
    let admin_api = use_context::<AdminApi>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    // Already logged in: straight to the dashboard.
    let authenticated = admin_api.session().is_authenticated();
    use_effect(move || {
        if authenticated {
            nav.push("/admin/dashboard");
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let api = admin_api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);

            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            match api.login(&credentials).await {
                Ok(response) => {
                    api.session().store(response.token);
                    nav.push("/admin/dashboard");
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    error.set(Some("Login failed"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Admin Login" }
                p { class: "login-subtitle", "Sign in to manage candidate applications" }

                form { class: "login-form", onsubmit: on_submit,
                    if let Some(err) = error() {
                        div { class: "error-message", "{err}" }
                    }

                    div { class: "form-group",
                        label { "Username" }
                        input {
                            r#type: "text",
                            required: true,
                            autofocus: true,
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
