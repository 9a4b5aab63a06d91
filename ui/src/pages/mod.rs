// Page components
use crate::components::buttons::Button;
use crate::components::layout::PublicLayout;
use leptos::*;
use leptos_router::*;

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod linkedin;
pub mod plans;
pub mod profile;

pub use admin::*;
pub use auth::*;
pub use dashboard::*;
pub use linkedin::*;
pub use plans::*;
pub use profile::*;

const TRUST_POINTS: [&str; 3] = ["AI-Powered Analysis", "Real-time Monitoring", "Competitor Insights"];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🔍",
        "Comprehensive Audits",
        "Get detailed insights into your website's SEO performance with our AI-powered analysis.",
    ),
    (
        "📈",
        "Real-time Monitoring",
        "Track your rankings and performance metrics in real-time across all major search engines.",
    ),
    (
        "🎯",
        "Competitor Analysis",
        "Stay ahead of the competition with detailed insights into your competitors' strategies.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <PublicLayout>
            <section class="bg-gradient-to-b from-blue-50 to-white py-20">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-5xl font-bold text-gray-900 mb-6">"Master Your SEO Game"</h1>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10">
                        "Comprehensive SEO auditing and optimization tool powered by AI. "
                        "Boost your rankings across Google, social media, and beyond."
                    </p>
                    <Button on_click=move |_: ev::MouseEvent| navigate("/signup", Default::default())>
                        "Start Free Audit"
                    </Button>
                    <p class="mt-4 text-sm text-gray-500">"No credit card required • 5-minute setup"</p>
                    <div class="mt-10 flex flex-wrap justify-center gap-6 text-sm text-gray-700">
                        {TRUST_POINTS
                            .iter()
                            .map(|point| view! {
                                <div class="flex items-center space-x-2">
                                    <span class="text-green-500">"✓"</span>
                                    <span>{*point}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">"Everything You Need to Dominate SEO"</h2>
                        <p class="text-lg text-gray-600">"Powerful tools and insights to boost your search rankings"</p>
                    </div>
                    <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                        {FEATURES
                            .iter()
                            .map(|&(icon, title, detail)| view! {
                                <div class="bg-white rounded-lg shadow p-6 text-center">
                                    <div class="w-12 h-12 mx-auto mb-4 rounded-lg bg-blue-100 flex items-center justify-center">
                                        <span class="text-2xl">{icon}</span>
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
                                    <p class="text-gray-600">{detail}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </PublicLayout>
    }
}

/// Unknown paths go back to the landing page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    log::debug!("unknown route, redirecting home");
    view! { <Redirect path="/"/> }
}
