// SEO Master Pro UI - SEO tooling dashboard interface
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod admin;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod components;
pub mod config;
pub mod controller;
pub mod otp;
pub mod pages;
pub mod store;
pub mod timer;
pub mod types;
pub mod utils;
pub mod validation;
pub mod wizard;

use auth::AuthGuard;
use components::layout::{AdminLayout, UserLayout};
use config::{provide_config, AppConfig};
use pages::*;
use types::Role;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_config(config.clone());
    api::provide_backend(&config);
    store::provide_stores();

    view! {
        <Title text="SEO Master Pro"/>
        <Meta name="description" content="SEO auditing and LinkedIn profile optimization, powered by AI"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/signin" view=SignInPage/>
                <Route path="/signup" view=SignUpPage/>
                <Route path="/forgot-password" view=ForgotPasswordPage/>
                <Route path="/complete-profile" view=CompleteProfilePage/>
                <Route path="/otp" view=OtpPage/>

                // User area
                <Route path="/user" view=UserArea>
                    <Route path="" view=|| view! { <Redirect path="/user/dashboard"/> }/>
                    <Route path="dashboard" view=UserDashboardPage/>
                    <Route path="profile" view=ProfilePage/>
                    <Route path="plans" view=PlansPage/>
                    <Route path="linkedin-tool" view=LinkedInToolPage/>
                    <Route path="payment/success" view=PaymentSuccessPage/>
                    <Route path="payment/failure" view=PaymentFailurePage/>
                </Route>

                // Admin area
                <Route path="/admin" view=AdminArea>
                    <Route path="" view=|| view! { <Redirect path="/admin/dashboard"/> }/>
                    <Route path="dashboard" view=AdminDashboardPage/>
                    <Route path="plans" view=AdminPlansPage/>
                    <Route path="users" view=AdminUsersPage/>
                    <Route path="payments" view=AdminPaymentsPage/>
                </Route>

                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn UserArea() -> impl IntoView {
    view! {
        <AuthGuard role=Role::User>
            <UserLayout>
                <Outlet/>
            </UserLayout>
        </AuthGuard>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <AuthGuard role=Role::Admin>
            <AdminLayout>
                <Outlet/>
            </AdminLayout>
        </AuthGuard>
    }
}

/// Entry point for the client-side bundle.
pub fn mount() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_env();
    let level = loaded.as_ref().map_or(log::Level::Debug, |config| config.log_level);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    let config = loaded.unwrap_or_else(|err| {
        log::error!("invalid configuration, using defaults: {}", err);
        AppConfig::default()
    });
    log::info!("starting SEO Master Pro UI");

    mount_to_body(move || view! { <App config=config/> });
}
