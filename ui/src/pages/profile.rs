use crate::components::cards::Card;
use crate::components::layout::PageHeader;
use crate::components::tables::Badge;
use crate::store::use_stores;
use crate::types::{Subscription, SubscriptionStatus, UserProfile};
use crate::utils::format_date;
use leptos::*;
use leptos_router::*;

fn status_badge(status: SubscriptionStatus) -> (&'static str, &'static str) {
    match status {
        SubscriptionStatus::Active => ("bg-green-100 text-green-800", "active"),
        SubscriptionStatus::Expired => ("bg-red-100 text-red-800", "expired"),
        SubscriptionStatus::Cancelled => ("bg-gray-100 text-gray-800", "cancelled"),
        SubscriptionStatus::Inactive => ("bg-gray-100 text-gray-800", "inactive"),
    }
}

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between py-3 border-b border-gray-100 last:border-0">
            <span class="text-gray-600">{label}</span>
            <span class="font-medium text-gray-900">{value}</span>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();

    let user_field = move |pick: fn(&UserProfile) -> String| {
        stores
            .user_auth
            .with(|s| s.user.as_ref().map(pick))
            .unwrap_or_else(|| "N/A".to_string())
    };
    let subscription = move || stores.payment.with(|s| s.subscription.clone());
    let has_subscription = move || stores.payment.with(|s| s.subscription.is_some());

    let to_plans = move |_: ev::MouseEvent| navigate("/user/plans", Default::default());

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <PageHeader title="Profile"/>

            <Card title="Personal Information">
                {move || view! {
                    <InfoRow label="Name" value=user_field(|u| u.name.clone())/>
                    <InfoRow label="Email" value=user_field(|u| u.email.clone())/>
                    <InfoRow label="User ID" value=user_field(|u| u.id.clone())/>
                }}
            </Card>

            <Card>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold text-gray-900">"Subscription"</h2>
                    <button
                        type="button"
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                        on:click=to_plans
                    >
                        {move || if has_subscription() { "Change Plan" } else { "Subscribe Now" }}
                    </button>
                </div>
                {move || match subscription() {
                    Some(subscription) => view! { <SubscriptionDetails subscription=subscription/> }.into_view(),
                    None => view! {
                        <div class="text-center py-8">
                            <InfoRow label="Plan" value="N/A"/>
                            <h3 class="mt-6 text-lg font-medium text-gray-900 mb-2">"No Active Subscription"</h3>
                            <p class="text-gray-600">
                                "Subscribe to a plan to unlock all features and start optimizing your LinkedIn profile."
                            </p>
                            <A href="/user/plans" class="mt-4 inline-block px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                                "View Plans"
                            </A>
                        </div>
                    }
                    .into_view(),
                }}
            </Card>
        </div>
    }
}

#[component]
fn SubscriptionDetails(subscription: Subscription) -> impl IntoView {
    let (badge_class, status_label) = status_badge(subscription.status);

    view! {
        <div class="space-y-1">
            <InfoRow label="Plan" value=subscription.plan.label()/>
            <div class="flex justify-between py-3 border-b border-gray-100">
                <span class="text-gray-600">"Status"</span>
                <Badge class=badge_class label=status_label/>
            </div>
            <InfoRow label="Expiry Date" value=format_date(&subscription.expiry_date)/>
            <div class="pt-3">
                <span class="text-gray-600 block mb-2">"Features"</span>
                <ul class="space-y-1">
                    {subscription
                        .features
                        .into_iter()
                        .map(|feature| view! {
                            <li class="flex items-center text-sm text-gray-700">
                                <span class="text-green-500 mr-2">"✓"</span>
                                {feature}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
