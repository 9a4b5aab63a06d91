use crate::api::use_backend;
use crate::catalog::{checkout_plan, plan_offer, PLAN_OFFERS};
use crate::components::buttons::Button;
use crate::components::cards::{Card, PlanCard};
use crate::components::layout::LoadingSpinner;
use crate::components::notifications::Alert;
use crate::controller::SubmitState;
use crate::store::{use_stores, PaymentAction};
use crate::timer::{spawn_cancellable, TaskScope};
use crate::types::{BillingCycle, CheckoutReceipt, CheckoutRequest, PlanTier};
use crate::utils::{abbreviate_reference, format_date};
use chrono::Utc;
use leptos::*;
use leptos_router::*;

const DEFAULT_FAILURE_ERROR: &str = "An unexpected error occurred during payment processing.";
const DEFAULT_FAILURE_PLAN: &str = "your selected plan";

/// Follows a checkout redirect. In-app paths go through the router, anything
/// else is a hosted payment page.
fn follow_redirect(url: &str, navigate: &dyn Fn(&str, NavigateOptions)) {
    if url.starts_with('/') {
        navigate(url, Default::default());
    } else if let Err(err) = window().location().set_href(url) {
        log::error!("checkout redirect to {} failed: {:?}", url, err);
    }
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let navigate = use_navigate();
    let scope = TaskScope::new();
    let submit = SubmitState::new();
    let cycle = create_rw_signal(BillingCycle::Monthly);
    let pending = create_rw_signal(None::<PlanTier>);

    let current_plan = move || stores.payment.with(|s| s.subscription.as_ref().map(|sub| sub.plan));

    let on_select = Callback::new(move |tier: PlanTier| {
        let offer = plan_offer(tier);
        if offer.is_free() {
            stores
                .payment
                .dispatch(PaymentAction::SetSubscription(Some(offer.activate(Utc::now()))));
            log::info!("free plan activated");
            navigate("/user/dashboard", Default::default());
            return;
        }
        if submit.loading.get_untracked() {
            return;
        }

        let backend = backend.clone();
        let navigate = navigate.clone();
        pending.set(Some(tier));
        scope.spawn(async move {
            let request = CheckoutRequest {
                plan: tier,
                billing_cycle: cycle.get_untracked(),
            };
            let session = submit.run("checkout", backend.create_checkout(request)).await;
            pending.try_set(None);
            if let Some(session) = session {
                follow_redirect(&session.redirect_url, &navigate);
            }
        });
    });

    let cycle_button = move |value: BillingCycle, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if cycle.get() == value {
                        "px-6 py-2 rounded-md text-sm font-medium bg-white text-gray-900 shadow"
                    } else {
                        "px-6 py-2 rounded-md text-sm font-medium text-gray-600"
                    }
                }
                on:click=move |_| cycle.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="space-y-10">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Choose Your Plan"</h1>
                <p class="text-xl text-gray-600">"Select the perfect plan for your LinkedIn optimization needs"</p>
                <div class="mt-8 inline-flex rounded-lg bg-gray-100 p-1">
                    {cycle_button(BillingCycle::Monthly, "Monthly")}
                    {cycle_button(BillingCycle::Yearly, "Yearly")}
                </div>
            </div>

            <Alert message=submit.error/>

            <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-4">
                {PLAN_OFFERS
                    .iter()
                    .map(|offer| {
                        let tier = offer.tier;
                        view! {
                            <PlanCard
                                offer=offer
                                cycle=cycle
                                current=Signal::derive(move || current_plan() == Some(tier))
                                loading=Signal::derive(move || submit.loading.get() && pending.get() == Some(tier))
                                on_select=on_select
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <p class="text-center text-sm text-gray-600">
                "All plans include a 14-day money-back guarantee. Cancel anytime."
            </p>
        </div>
    }
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let query = use_query_map();
    let submit = SubmitState::new();
    let receipt = create_rw_signal(None::<CheckoutReceipt>);

    let (session_id, plan_label) = query.with_untracked(|q| {
        (
            q.get("session_id").cloned().unwrap_or_default(),
            q.get("plan").cloned(),
        )
    });
    let plan = checkout_plan(plan_label.as_deref());

    match plan {
        Some(plan) => {
            spawn_cancellable({
                let session_id = session_id.clone();
                async move {
                    if let Some(verified) = submit.run("verify-checkout", backend.verify_checkout(&session_id, plan)).await {
                        stores
                            .payment
                            .dispatch(PaymentAction::SetSubscription(Some(verified.subscription.clone())));
                        receipt.try_set(Some(verified));
                    }
                }
            });
        }
        None => {
            log::warn!("checkout returned an unknown plan: {:?}", plan_label);
            submit
                .error
                .set(Some("We couldn't recognize the plan for this payment. Please contact support.".to_string()));
        }
    }
    let plan_name = plan.map_or("", PlanTier::label);

    let transaction = move || {
        receipt.with(|r| {
            let id = r.as_ref().map_or(session_id.as_str(), |r| r.transaction_id.as_str());
            abbreviate_reference(id, 20)
        })
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <Show
                when=move || receipt.with(Option::is_some)
                fallback=move || view! {
                    <Show
                        when=move || submit.loading.get()
                        fallback=move || view! {
                            <div class="space-y-4 text-center">
                                <Alert message=submit.error/>
                                <A href="/user/plans" class="text-blue-600 hover:text-blue-700 font-medium">"Back to Plans"</A>
                            </div>
                        }
                    >
                        <LoadingSpinner label="Verifying your payment..."/>
                    </Show>
                }
            >
                <div class="bg-white rounded-lg shadow-lg p-8 text-center">
                    <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-green-100 flex items-center justify-center">
                        <svg class="w-12 h-12 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                        </svg>
                    </div>
                    <h1 class="text-3xl font-bold text-gray-900 mb-4">"Payment Successful!"</h1>
                    <p class="text-gray-600 mb-8">
                        "Thank you for subscribing to the "
                        <span class="font-semibold">{plan_name}</span>
                        " plan. Your payment has been processed successfully."
                    </p>
                    <div class="bg-gray-50 rounded-lg p-6 mb-8 text-left space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900 mb-4">"Order Details"</h2>
                        <div class="flex justify-between">
                            <span class="text-gray-600">"Plan"</span>
                            <span class="font-medium text-gray-900">{plan_name}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-gray-600">"Status"</span>
                            <span class="px-3 py-1 rounded-full text-sm font-medium bg-green-100 text-green-800">"Active"</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-gray-600">"Transaction ID"</span>
                            <span class="font-mono text-sm text-gray-900">{transaction.clone()}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-gray-600">"Date"</span>
                            <span class="text-gray-900">{format_date(&Utc::now())}</span>
                        </div>
                    </div>
                    <p class="text-sm text-gray-600 mb-8">
                        "A confirmation email has been sent to your registered email address with your receipt and subscription details."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A href="/user/dashboard" class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium">
                            "Go to Dashboard"
                        </A>
                        <A href="/user/linkedin-tool" class="px-6 py-3 bg-gray-100 text-gray-900 rounded-lg hover:bg-gray-200 font-medium">
                            "Start Optimizing"
                        </A>
                    </div>
                </div>
                <Card title="What's Next?">
                    <ol class="space-y-4">
                        <NextStep number=1 title="Connect Your LinkedIn Profile" detail="Link your LinkedIn account to start optimizing your profile"/>
                        <NextStep number=2 title="Analyze Your Profile" detail="Get AI-powered insights and recommendations"/>
                        <NextStep number=3 title="Optimize & Grow" detail="Apply suggestions and watch your profile improve"/>
                    </ol>
                </Card>
            </Show>
        </div>
    }
}

#[component]
fn NextStep(number: u8, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start">
            <span class="flex-shrink-0 w-8 h-8 rounded-full bg-blue-100 text-blue-600 font-semibold flex items-center justify-center mr-3">
                {number}
            </span>
            <div>
                <p class="font-medium text-gray-900">{title}</p>
                <p class="text-sm text-gray-600">{detail}</p>
            </div>
        </li>
    }
}

#[component]
pub fn PaymentFailurePage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let (error, plan) = query.with_untracked(|q| {
        (
            q.get("error").cloned().unwrap_or_else(|| DEFAULT_FAILURE_ERROR.to_string()),
            q.get("plan").cloned().unwrap_or_else(|| DEFAULT_FAILURE_PLAN.to_string()),
        )
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div class="bg-white rounded-lg shadow-lg p-8 text-center">
                <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-red-100 flex items-center justify-center">
                    <svg class="w-12 h-12 text-red-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                    </svg>
                </div>
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Payment Failed"</h1>
                <p class="text-gray-600 mb-6">
                    "We couldn't process your payment for "
                    <span class="font-semibold">{plan}</span>
                    ". Please try again or contact support if the issue persists."
                </p>
                <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-8 text-left">
                    <p class="text-sm text-red-800">
                        <span class="font-semibold">"Error: "</span>
                        {error}
                    </p>
                </div>
                <div class="text-left mb-8">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">"Common Issues"</h2>
                    <ul class="space-y-2 text-sm text-gray-600 list-disc list-inside">
                        <li>"Insufficient funds in your account"</li>
                        <li>"Card declined by your bank"</li>
                        <li>"Incorrect card details or expiration date"</li>
                        <li>"Network or connection issues"</li>
                    </ul>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button on_click=move |_: ev::MouseEvent| navigate("/user/plans", Default::default())>
                        "Try Again"
                    </Button>
                    <A href="/user/dashboard" class="px-4 py-2 bg-gray-100 text-gray-900 rounded-md hover:bg-gray-200 text-sm font-medium">
                        "Back to Dashboard"
                    </A>
                </div>
            </div>
            <Card title="Need Help?">
                <p class="text-gray-600 mb-4">"Our support team is here to assist you with any payment issues."</p>
                <a href="mailto:support@seomaster.com" class="text-blue-600 hover:text-blue-700 font-medium">"Email Support"</a>
            </Card>
        </div>
    }
}
