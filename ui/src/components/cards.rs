// Card components
use crate::catalog::{PlanOffer, SeoTool};
use crate::components::buttons::{Button, ButtonVariant};
use crate::types::{BillingCycle, PlanTier};
use crate::utils::format_price;
use leptos::*;
use leptos_router::A;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white overflow-hidden shadow rounded-lg {}", class)>
            {title.map(|t| view! {
                <div class="px-4 pt-5 sm:px-6">
                    <h3 class="text-base font-semibold leading-6 text-gray-900">{t}</h3>
                </div>
            })}
            <div class="px-4 py-5 sm:p-6">{children()}</div>
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "blue")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg p-5">
            <div class="flex items-center">
                <div class=format!("flex-shrink-0 w-3 h-10 rounded bg-{}-500", accent)></div>
                <div class="ml-4">
                    <dt class="text-sm font-medium text-gray-500 truncate">{title}</dt>
                    <dd class="text-2xl font-semibold text-gray-900">{move || value.get()}</dd>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ToolCard(tool: SeoTool) -> impl IntoView {
    let icon = view! {
        <div class="w-12 h-12 rounded-lg bg-blue-100 flex items-center justify-center mb-4">
            <svg class="w-6 h-6 text-blue-600" fill="currentColor" viewBox="0 0 24 24">
                <path d=tool.icon.svg_path()></path>
            </svg>
        </div>
    };

    match tool.route {
        Some(route) => view! {
            <A href=route class="block bg-white rounded-lg shadow p-6 hover:shadow-lg transition-shadow">
                {icon}
                <h3 class="text-lg font-semibold text-gray-900">{tool.name}</h3>
                <p class="mt-1 text-sm text-gray-600">{tool.description}</p>
                <span class="mt-4 inline-block text-sm font-medium text-blue-600">"Get Started →"</span>
            </A>
        }
        .into_view(),
        None => view! {
            <div class="relative bg-white rounded-lg shadow p-6 opacity-75 cursor-not-allowed">
                <span class="absolute top-4 right-4 px-2 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-600">
                    "Coming Soon"
                </span>
                {icon}
                <h3 class="text-lg font-semibold text-gray-900">{tool.name}</h3>
                <p class="mt-1 text-sm text-gray-600">{tool.description}</p>
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn PlanCard(
    offer: &'static PlanOffer,
    #[prop(into)] cycle: Signal<BillingCycle>,
    #[prop(into)] current: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<PlanTier>,
) -> impl IntoView {
    let border = if offer.popular {
        "border-2 border-blue-500"
    } else {
        "border border-gray-200"
    };

    view! {
        <div class=format!("relative bg-white rounded-lg shadow p-6 flex flex-col {}", border)>
            {offer.popular.then(|| view! {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 text-xs font-semibold rounded-full bg-blue-500 text-white">
                    "Most Popular"
                </span>
            })}
            <h3 class="text-xl font-semibold text-gray-900">{offer.tier.label()}</h3>
            <p class="mt-4">
                <span class="text-4xl font-bold text-gray-900">
                    {move || format_price(offer.price(cycle.get()))}
                </span>
                <span class="text-gray-500">{move || cycle.get().suffix()}</span>
            </p>
            <ul class="mt-6 space-y-2 flex-1">
                {offer
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-start text-sm text-gray-700">
                            <span class="text-green-500 mr-2">"✓"</span>
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="mt-6">
                <Button
                    variant=if offer.popular { ButtonVariant::Primary } else { ButtonVariant::Secondary }
                    full_width=true
                    loading=loading
                    loading_text="Redirecting..."
                    disabled=current
                    on_click=move |_: ev::MouseEvent| on_select.call(offer.tier)
                >
                    {move || if current.get() {
                        "Current Plan"
                    } else if offer.is_free() {
                        "Get Started"
                    } else {
                        "Subscribe"
                    }}
                </Button>
            </div>
        </div>
    }
}
