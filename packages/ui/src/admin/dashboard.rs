//! Main admin dashboard component.

use api::AdminApi;
use dioxus::prelude::*;
use futures_util::future::try_join;
use interview_core::{
    Application, ApplicationId, ApplicationStatus, ExamType, ExportFormat, FetchSequence,
    QueryState, Stats,
};

use super::{
    ApplicationTable, DeleteModal, EditModal, FilterBar, ImagePreview, PaginationFooter,
    StatsCards,
};
use crate::browser;

/// Dashboard controller for the application list.
///
/// Owns the query state and the fetched list/stats mirror; the children are
/// presentational and report intent back through callbacks. Applications
/// and stats are fetched together on every query change; overlapping cycles
/// are numbered and only the latest-numbered completion is applied.
#[component]
pub fn AdminDashboardPage() -> Element {
    let admin_api = use_context::<AdminApi>();
    let nav = use_navigator();

    // Controller state
    let mut query = use_signal(QueryState::new);
    let mut applications = use_signal(Vec::<Application>::new);
    let mut stats = use_signal(Stats::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<&'static str>);
    let mut fetch_seq = use_signal(FetchSequence::new);

    // Transient UI state
    let mut show_stats = use_signal(|| true);
    let mut edit_target = use_signal(|| None::<Application>);
    let mut delete_target = use_signal(|| None::<Application>);
    let mut preview_url = use_signal(|| None::<String>);

    // Auth gate: without a token there is no dashboard and no fetch.
    let authenticated = admin_api.session().is_authenticated();
    use_effect(move || {
        if !authenticated {
            nav.push("/admin/login");
        }
    });

    // Combined fetch of one page plus the aggregate stats. Cycles are
    // numbered; a completion that is no longer the latest issued cycle is
    // dropped wholesale, so rapid filter changes cannot apply stale data.
    let fetch_data = {
        let api = admin_api.clone();
        use_callback(move |current: QueryState| {
            if !api.session().is_authenticated() {
                return;
            }
            let api = api.clone();
            let seq = fetch_seq.write().next();
            spawn(async move {
                loading.set(true);
                let result = try_join(api.list_applications(&current), api.stats()).await;
                if !fetch_seq.read().is_latest(seq) {
                    // A newer cycle owns the visible state now.
                    return;
                }
                match result {
                    Ok((page, fresh)) => {
                        applications.set(page.applications);
                        stats.set(fresh);
                    }
                    Err(err) => {
                        tracing::error!("dashboard fetch failed: {err}");
                        error.set(Some("Failed to fetch data"));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Re-fetch on any query change. A filter change resets the page in the
    // same write, so it lands here as exactly one fetch at page 1.
    use_effect(move || {
        fetch_data.call(query());
    });

    // Mutation commands: success re-fetches with the current query,
    // failure surfaces its generic notice and skips the fetch.
    let on_delete_confirm = {
        let api = admin_api.clone();
        move |app: Application| {
            // The confirmation modal closes before the call resolves and a
            // failure does not reopen it.
            delete_target.set(None);
            let api = api.clone();
            spawn(async move {
                match api.delete_application(&app.id).await {
                    Ok(()) => fetch_data.call(query()),
                    Err(err) => {
                        tracing::error!("delete failed: {err}");
                        error.set(Some("Delete failed"));
                    }
                }
            });
        }
    };

    let on_status_change = {
        let api = admin_api.clone();
        move |(id, status): (ApplicationId, ApplicationStatus)| {
            let api = api.clone();
            spawn(async move {
                // No optimistic update; the row keeps the old status until
                // the re-fetch lands.
                match api.update_status(&id, status).await {
                    Ok(()) => fetch_data.call(query()),
                    Err(err) => {
                        tracing::error!("status update failed: {err}");
                        error.set(Some("Status update failed"));
                    }
                }
            });
        }
    };

    let on_edit_save = {
        let api = admin_api.clone();
        move |app: Application| {
            let api = api.clone();
            spawn(async move {
                match api.update_application(&app).await {
                    Ok(()) => {
                        edit_target.set(None);
                        fetch_data.call(query());
                    }
                    Err(err) => {
                        tracing::error!("update failed: {err}");
                        error.set(Some("Update failed"));
                    }
                }
            });
        }
    };

    let on_export = {
        let api = admin_api.clone();
        move |format: ExportFormat| {
            let api = api.clone();
            spawn(async move {
                match api.export(format).await {
                    Ok(bytes) => {
                        if !browser::download_bytes(&bytes, &format.file_name()) {
                            error.set(Some("Export failed"));
                        }
                    }
                    Err(err) => {
                        tracing::error!("export failed: {err}");
                        error.set(Some("Export failed"));
                    }
                }
            });
        }
    };

    let on_logout = {
        let api = admin_api.clone();
        move |_| {
            api.session().clear();
            nav.push("/admin/login");
        }
    };

    if !authenticated {
        return rsx! {};
    }

    let window = stats().page_window(query().page());
    let on_prev = move |_| {
        if !window.is_first() {
            query.write().prev_page();
        }
    };
    let on_next = move |_| {
        if !window.is_last() {
            query.write().next_page(window.total_pages);
        }
    };

    rsx! {
        div { class: "admin-dashboard",
            header { class: "admin-header",
                div { class: "admin-header-titles",
                    h1 { "Interview Admin Dashboard" }
                    p { class: "admin-header-subtitle", "Manage all candidate applications" }
                }
                div { class: "admin-header-actions",
                    Link { to: "/", class: "btn btn-ghost", "Home" }
                    button {
                        class: "btn btn-ghost btn-danger",
                        onclick: on_logout,
                        "Logout"
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            main { class: "admin-content",
                if show_stats() {
                    StatsCards { stats: stats() }
                }

                FilterBar {
                    query: query(),
                    stats_visible: show_stats(),
                    on_search: move |term: String| query.write().set_search(term),
                    on_status: move |status| query.write().set_status(status),
                    on_exam: move |exam: Option<ExamType>| query.write().set_exam(exam),
                    on_refresh: move |_| fetch_data.call(query()),
                    on_toggle_stats: move |_| show_stats.toggle(),
                    on_export,
                }

                div { class: "card",
                    if loading() {
                        div { class: "loading", "Loading applications..." }
                    } else if applications().is_empty() {
                        div { class: "empty-state",
                            p { "No applications found" }
                            p { class: "hint", "Try adjusting your filters" }
                        }
                    } else {
                        ApplicationTable {
                            applications: applications(),
                            on_edit: move |app: Application| edit_target.set(Some(app)),
                            on_delete: move |app: Application| delete_target.set(Some(app)),
                            on_status_change,
                            on_preview: move |url: String| preview_url.set(Some(url)),
                        }
                        PaginationFooter { window, on_prev, on_next }
                    }
                }
            }

            if let Some(url) = preview_url() {
                ImagePreview {
                    url,
                    on_close: move |_| preview_url.set(None),
                }
            }

            if let Some(app) = delete_target() {
                DeleteModal {
                    application: app,
                    on_cancel: move |_| delete_target.set(None),
                    on_confirm: on_delete_confirm,
                }
            }

            if let Some(app) = edit_target() {
                EditModal {
                    application: app,
                    on_cancel: move |_| edit_target.set(None),
                    on_save: on_edit_save,
                }
            }
        }
    }
}
