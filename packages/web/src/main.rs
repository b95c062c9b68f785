// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{AdminApi, ApiConfig, PublicApi, Session};
use dioxus::prelude::*;

use ui::InterviewBanner;
use ui::admin::{AdminDashboardPage, AdminLoginPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Public site
    #[route("/")]
    Home {},

    // Admin surface
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One session for the lifetime of the app; both API clients hang off it.
    let session = use_context_provider(Session::load);
    use_context_provider(|| PublicApi::new(&ApiConfig::default()));
    use_context_provider(move || AdminApi::new(&ApiConfig::default(), session.clone()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Public landing page with the application banner.
#[component]
fn Home() -> Element {
    rsx! {
        InterviewBanner {}
    }
}

/// Admin login page.
#[component]
fn AdminLogin() -> Element {
    rsx! {
        AdminLoginPage {}
    }
}

/// Admin dashboard page.
#[component]
fn AdminDashboard() -> Element {
    rsx! {
        AdminDashboardPage {}
    }
}
