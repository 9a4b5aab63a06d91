use crate::api::use_backend;
use crate::catalog::SEO_TOOLS;
use crate::components::cards::{Card, StatCard, ToolCard};
use crate::components::layout::{LoadingSpinner, PageHeader};
use crate::components::tables::{Badge, DataTable, EmptyRow};
use crate::controller::run_submission;
use crate::store::{use_stores, AdminDashboardAction, UserDashboardAction};
use crate::timer::spawn_cancellable;
use crate::types::{ActivityEntry, UserDashboardStats, UserMetric};
use crate::utils::{format_amount, format_relative_time};
use leptos::*;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let dashboard = stores.user_dashboard;

    spawn_cancellable(async move {
        let set_loading = move |loading| dashboard.dispatch(UserDashboardAction::SetLoading(loading));
        match run_submission("user-dashboard", set_loading, backend.user_dashboard()).await {
            Ok(data) => {
                dashboard.dispatch(UserDashboardAction::SetStats(data.stats));
                dashboard.dispatch(UserDashboardAction::SetRecentActivity(data.recent_activity));
                dashboard.dispatch(UserDashboardAction::SetError(None));
            }
            Err(err) => dashboard.dispatch(UserDashboardAction::SetError(Some(err.user_message()))),
        }
    });

    let first_name = stores
        .user_auth
        .with_untracked(|s| s.user.as_ref().and_then(|u| u.name.split_whitespace().next().map(String::from)))
        .unwrap_or_else(|| "there".to_string());
    let stat = move |pick: fn(&UserDashboardStats) -> u32| {
        Signal::derive(move || dashboard.with(|s| pick(&s.stats).to_string()))
    };

    view! {
        <div class="space-y-8">
            <PageHeader
                title=format!("Welcome back, {}!", first_name)
                description="Choose a tool to start optimizing your online presence"
            />

            {move || dashboard.with(|s| s.error.clone()).map(|error| view! {
                <div class="rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-800">{error}</div>
            })}

            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Analyses" value=stat(|s| s.total_analyses)/>
                <StatCard title="LinkedIn Optimizations" value=stat(|s| s.linkedin_optimizations) accent="indigo"/>
                <StatCard title="SEO Score" value=stat(|s| s.seo_score) accent="green"/>
                <StatCard title="Monthly Usage" value=stat(|s| s.monthly_usage) accent="yellow"/>
            </div>

            <section>
                <h2 class="text-xl font-semibold text-gray-900 mb-4">"SEO Tools"</h2>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {SEO_TOOLS.iter().map(|tool| view! { <ToolCard tool=*tool/> }).collect_view()}
                </div>
            </section>

            <div class="grid grid-cols-1 gap-8 lg:grid-cols-2">
                <Card title="Recent Activity">
                    <Show
                        when=move || !dashboard.with(|s| s.loading)
                        fallback=|| view! { <LoadingSpinner/> }
                    >
                        <ul class="divide-y divide-gray-100">
                            {move || {
                                let activity = dashboard.with(|s| s.recent_activity.clone());
                                if activity.is_empty() {
                                    view! { <li class="py-4 text-sm text-gray-500">"No activity yet"</li> }.into_view()
                                } else {
                                    activity.into_iter().map(|entry| view! { <ActivityItem entry=entry/> }).collect_view()
                                }
                            }}
                        </ul>
                    </Show>
                </Card>
                <LatestAnalysis/>
            </div>
        </div>
    }
}

#[component]
fn ActivityItem(entry: ActivityEntry) -> impl IntoView {
    view! {
        <li class="py-4 flex justify-between space-x-4">
            <div>
                <p class="text-sm text-gray-900">{entry.description}</p>
                <p class="text-xs text-gray-500 capitalize">{entry.kind.replace('_', " ")}</p>
            </div>
            <span class="whitespace-nowrap text-sm text-gray-500">{format_relative_time(&entry.timestamp)}</span>
        </li>
    }
}

/// Most recent LinkedIn and site results kept in the global stores.
#[component]
fn LatestAnalysis() -> impl IntoView {
    let stores = use_stores();

    view! {
        <Card title="Latest Results">
            <div class="space-y-4 text-sm">
                {move || match stores.linkedin.with(|s| s.analysis.clone()) {
                    Some(analysis) => view! {
                        <div>
                            <p class="font-medium text-gray-900">"LinkedIn profile score: " {analysis.score} "/100"</p>
                            <ul class="mt-2 list-disc list-inside text-gray-600">
                                {analysis.strengths.into_iter().take(3).map(|s| view! { <li>{s}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <p class="text-gray-500">"Run the LinkedIn tool to see your profile score here."</p>
                    }
                    .into_view(),
                }}
                {move || stores.seo.with(|s| s.analysis.clone()).map(|analysis| view! {
                    <div>
                        <p class="font-medium text-gray-900">{analysis.url} ": " {analysis.score} "/100"</p>
                        <p class="text-gray-600">{analysis.issues.len()} " issues found"</p>
                    </div>
                })}
            </div>
        </Card>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let dashboard = stores.admin_dashboard;

    spawn_cancellable(async move {
        let set_loading = move |loading| dashboard.dispatch(AdminDashboardAction::SetLoading(loading));
        match run_submission("admin-dashboard", set_loading, backend.admin_dashboard()).await {
            Ok(data) => {
                dashboard.dispatch(AdminDashboardAction::SetStats(data.stats));
                dashboard.dispatch(AdminDashboardAction::SetUserMetrics(data.user_metrics));
                dashboard.dispatch(AdminDashboardAction::SetError(None));
            }
            Err(err) => dashboard.dispatch(AdminDashboardAction::SetError(Some(err.user_message()))),
        }
    });

    let total_users = Signal::derive(move || dashboard.with(|s| s.stats.total_users.to_string()));
    let active_users = Signal::derive(move || dashboard.with(|s| s.stats.active_users.to_string()));
    let revenue = Signal::derive(move || dashboard.with(|s| format_amount(s.stats.total_revenue, "USD")));
    let health = Signal::derive(move || dashboard.with(|s| format!("{}%", s.stats.system_health)));

    view! {
        <div class="space-y-8">
            <PageHeader title="Admin Dashboard" description="Overview of users, revenue and system health"/>

            {move || dashboard.with(|s| s.error.clone()).map(|error| view! {
                <div class="rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-800">{error}</div>
            })}

            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Users" value=total_users/>
                <StatCard title="Active Users" value=active_users accent="green"/>
                <StatCard title="Total Revenue" value=revenue accent="indigo"/>
                <StatCard title="System Health" value=health accent="yellow"/>
            </div>

            <Card title="User Metrics">
                <Show
                    when=move || !dashboard.with(|s| s.loading)
                    fallback=|| view! { <LoadingSpinner label="Loading users..."/> }
                >
                    <DataTable headers=&["Name", "Email", "Subscription", "Last Active"]>
                        {move || {
                            let metrics = dashboard.with(|s| s.user_metrics.clone());
                            if metrics.is_empty() {
                                view! { <EmptyRow colspan=4 message="No users yet"/> }.into_view()
                            } else {
                                metrics.into_iter().map(|metric| view! { <MetricRow metric=metric/> }).collect_view()
                            }
                        }}
                    </DataTable>
                </Show>
            </Card>
        </div>
    }
}

#[component]
fn MetricRow(metric: UserMetric) -> impl IntoView {
    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{metric.name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{metric.email}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <Badge class="bg-blue-100 text-blue-800" label=metric.subscription.label()/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_relative_time(&metric.last_active)}</td>
        </tr>
    }
}
