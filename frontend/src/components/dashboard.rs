use crate::api::RoadWatchApi;
use crate::components::icons::*;
use crate::session::{logout, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use roadwatch_shared::{AnalyticsSummary, Complaint, ComplaintStatus};

/// Client-side view switches; contractors and settings are acknowledged
/// placeholders with no backend calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DashboardTab {
    #[default]
    Dashboard,
    Complaints,
    Contractors,
    Settings,
}

impl DashboardTab {
    const ALL: [DashboardTab; 4] = [
        DashboardTab::Dashboard,
        DashboardTab::Complaints,
        DashboardTab::Contractors,
        DashboardTab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "Dashboard",
            DashboardTab::Complaints => "Complaints",
            DashboardTab::Contractors => "Contractors",
            DashboardTab::Settings => "Settings",
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "Municipality Overview",
            DashboardTab::Complaints => "Direct Complaints",
            DashboardTab::Contractors => "Contractor Management",
            DashboardTab::Settings => "System Settings",
        }
    }
}

#[component]
pub fn MunicipalityPage() -> impl IntoView {
    let session = use_session();

    let (stats, set_stats) = signal(AnalyticsSummary::default());
    let (complaints, set_complaints) = signal(Vec::<Complaint>::new());
    let (loading, set_loading) = signal(true);
    let (active_tab, set_active_tab) = signal(DashboardTab::Dashboard);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None); // message, is_error

    // Both reads go out concurrently; a failed one is logged and leaves the
    // previously loaded state stale rather than crashing the view.
    let load_data = move || {
        let api = RoadWatchApi::default();
        set_loading.set(true);
        spawn_local(async move {
            let (stats_res, complaints_res) =
                futures::join!(api.get_analytics(), api.get_complaints());
            match stats_res {
                Ok(data) => set_stats.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to load analytics: {e}").into())
                }
            }
            match complaints_res {
                Ok(data) => set_complaints.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("failed to load complaints: {e}").into())
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| {
        load_data();
    });

    // No optimistic update: PATCH, then re-fetch both lists so the displayed
    // aggregates always match the change.
    let handle_status_change = move |id: String, status: ComplaintStatus| {
        spawn_local(async move {
            let api = RoadWatchApi::default();
            match api.update_status(&id, status).await {
                Ok(()) => {
                    set_notification.set(Some((format!("Complaint {id} set to {status}"), false)));
                    load_data();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("status update failed: {e}").into());
                    set_notification.set(Some(("Failed to update status".to_string(), true)));
                }
            }
        });
    };

    let on_logout = move |_| {
        // The router notices the session change and leaves this page.
        logout(&session);
    };

    // Clear the toast after 3 seconds
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let total = move || stats.get().total;

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Show when=move || notification.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            let (_, is_err) = notification.get().unwrap_or_default();
                            if is_err {
                                "alert alert-error shadow-lg"
                            } else {
                                "alert alert-success shadow-lg"
                            }
                        }>
                            <span>{move || notification.get().unwrap_or_default().0}</span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Shield attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"RoadWatch Municipality"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || active_tab.get().headline()}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <div role="tablist" class="tabs tabs-boxed hidden md:flex">
                            {DashboardTab::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <a
                                            role="tab"
                                            class=move || {
                                                if active_tab.get() == tab { "tab tab-active" } else { "tab" }
                                            }
                                            on:click=move |_| set_active_tab.set(tab)
                                        >
                                            {tab.label()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>

                <Show when=move || active_tab.get() == DashboardTab::Dashboard>
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-figure text-primary">
                                <ClipboardList attr:class="inline-block w-8 h-8" />
                            </div>
                            <div class="stat-title">"Total Reports"</div>
                            <div class="stat-value text-primary">{total}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-warning">
                                <Clock attr:class="inline-block w-8 h-8" />
                            </div>
                            <div class="stat-title">"Pending"</div>
                            <div class="stat-value text-warning">{move || stats.get().pending}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-info">
                                <BarChart3 attr:class="inline-block w-8 h-8" />
                            </div>
                            <div class="stat-title">"In Progress"</div>
                            <div class="stat-value text-info">{move || stats.get().in_progress}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-success">
                                <CheckCircle2 attr:class="inline-block w-8 h-8" />
                            </div>
                            <div class="stat-title">"Resolved"</div>
                            <div class="stat-value text-success">{move || stats.get().resolved}</div>
                        </div>
                    </div>
                </Show>

                <Show when=move || {
                    matches!(active_tab.get(), DashboardTab::Dashboard | DashboardTab::Complaints)
                }>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <div class="flex items-center justify-between p-6 pb-2">
                                <div>
                                    <h3 class="card-title">"Citizen Reports"</h3>
                                    <p class="text-base-content/70 text-sm">
                                        "Review incoming damage reports and track their status."
                                    </p>
                                </div>
                                <button
                                    on:click=move |_| load_data()
                                    disabled=move || loading.get()
                                    class="btn btn-ghost btn-circle"
                                >
                                    <RefreshCw attr:class=move || {
                                        if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                                    } />
                                </button>
                            </div>

                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Citizen"</th>
                                            <th class="hidden md:table-cell">"Ward"</th>
                                            <th>"Type"</th>
                                            <th class="hidden md:table-cell">"Reported"</th>
                                            <th class="hidden md:table-cell">"AI Confidence"</th>
                                            <th class="hidden md:table-cell">"Location"</th>
                                            <th class="hidden md:table-cell">"Photo"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || {
                                            complaints.with(|c| c.is_empty()) && !loading.get()
                                        }>
                                            <tr>
                                                <td colspan="9" class="text-center py-8 text-base-content/50">
                                                    "No complaints on record."
                                                </td>
                                            </tr>
                                        </Show>
                                        <Show when=move || {
                                            loading.get() && complaints.with(|c| c.is_empty())
                                        }>
                                            <tr>
                                                <td colspan="9" class="text-center py-8 text-base-content/50">
                                                    <span class="loading loading-spinner loading-md"></span>
                                                    " Loading..."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || complaints.get()
                                            key=|c| (c.complaint_id.clone(), c.status)
                                            children=move |complaint| {
                                                view! { <ComplaintRow complaint on_status_change=handle_status_change /> }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                </Show>

                <Show when=move || {
                    matches!(active_tab.get(), DashboardTab::Contractors | DashboardTab::Settings)
                }>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center py-16 text-base-content/50">
                            {move || {
                                if active_tab.get() == DashboardTab::Contractors {
                                    view! { <Users attr:class="h-10 w-10 mb-2" /> }.into_any()
                                } else {
                                    view! { <Settings attr:class="h-10 w-10 mb-2" /> }.into_any()
                                }
                            }}
                            <p>{move || active_tab.get().headline()}</p>
                            <p class="text-sm">"This section is a placeholder."</p>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Link and thumbnail point at the same image; each attribute needs its own
/// owned copy of the URL.
fn photo_cell_urls(image_url: Option<String>) -> Option<(String, String)> {
    let url = image_url?;
    Some((url.clone(), url))
}

#[component]
fn ComplaintRow<F>(complaint: Complaint, on_status_change: F) -> impl IntoView
where
    F: Fn(String, ComplaintStatus) + Copy + 'static,
{
    let id = complaint.complaint_id.clone();
    let current_status = complaint.status;
    let map_url = complaint.map_url();
    let image_url = complaint.image_url();

    let on_change = move |ev: leptos::web_sys::Event| {
        if let Ok(status) = event_target_value(&ev).parse::<ComplaintStatus>() {
            on_status_change(id.clone(), status);
        }
    };

    view! {
        <tr>
            <td class="font-mono text-sm font-bold">{complaint.complaint_id.clone()}</td>
            <td>{complaint.citizen_name.clone()}</td>
            <td class="hidden md:table-cell">{complaint.ward.clone()}</td>
            <td>
                <div class="badge badge-accent badge-outline">{complaint.damage_type.clone()}</div>
            </td>
            <td class="hidden md:table-cell text-sm">
                {complaint
                    .created_at
                    .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
                    .unwrap_or_else(|| "—".to_string())}
            </td>
            <td class="hidden md:table-cell font-mono text-xs">
                {complaint
                    .ai_confidence
                    .map(|c| format!("{:.1}%", c * 100.0))
                    .unwrap_or_else(|| "—".to_string())}
            </td>
            <td class="hidden md:table-cell">
                {match map_url {
                    Some(url) => view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="link link-primary flex items-center gap-1 text-sm"
                        >
                            <ExternalLink attr:class="h-4 w-4" /> "Map"
                        </a>
                    }
                    .into_any(),
                    None => view! { <span class="opacity-50">"—"</span> }.into_any(),
                }}
            </td>
            <td class="hidden md:table-cell">
                {match photo_cell_urls(image_url) {
                    Some((link, thumb)) => view! {
                        <a href=link target="_blank" rel="noopener noreferrer">
                            <img
                                src=thumb
                                alt="Road damage"
                                class="w-12 h-12 object-cover rounded-lg border border-base-300"
                            />
                        </a>
                    }
                    .into_any(),
                    None => view! { <span class="opacity-50">"—"</span> }.into_any(),
                }}
            </td>
            <td>
                <select class="select select-bordered select-sm" on:change=on_change>
                    {ComplaintStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected=status == current_status>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_cell_yields_an_owned_url_per_attribute() {
        let (link, thumb) = photo_cell_urls(Some("/uploads/A1B2C3D4_road.jpg".to_string()))
            .expect("a stored image path produces a cell");
        assert_eq!(link, "/uploads/A1B2C3D4_road.jpg");
        assert_eq!(link, thumb);

        assert!(photo_cell_urls(None).is_none());
    }
}
