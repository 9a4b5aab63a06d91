use crate::components::buttons::Spinner;
use crate::components::footer::Footer;
use crate::store::use_stores;
use crate::utils::initials;
use leptos::*;
use leptos_router::*;

const USER_NAV: [(&str, &str); 4] = [
    ("/user/dashboard", "Dashboard"),
    ("/user/linkedin-tool", "LinkedIn Tool"),
    ("/user/plans", "Plans"),
    ("/user/profile", "Profile"),
];

const ADMIN_NAV: [(&str, &str); 4] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/plans", "Plans"),
    ("/admin/users", "Users"),
    ("/admin/payments", "Payments"),
];

#[component]
fn Logo() -> impl IntoView {
    view! {
        <A href="/" class="flex items-center space-x-2">
            <span class="w-8 h-8 rounded-lg bg-blue-600 text-white font-bold flex items-center justify-center">"S"</span>
            <span class="text-xl font-bold text-gray-900">"SEO Master Pro"</span>
        </A>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();

    view! {
        <button
            type="button"
            class="text-sm font-medium text-gray-600 hover:text-gray-900"
            on:click=move |_| {
                stores.logout();
                navigate("/signin", Default::default());
            }
        >
            "Logout"
        </button>
    }
}

/// Header and footer around the public marketing pages.
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="border-b border-gray-200">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <Logo/>
                    <nav class="flex items-center space-x-4">
                        <A href="/signin" class="text-sm font-medium text-gray-700 hover:text-gray-900">"Sign In"</A>
                        <A href="/signup" class="px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700">
                            "Get Started"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1">{children()}</main>
            <Footer/>
        </div>
    }
}

/// Centred card used by the sign-in, sign-up and onboarding forms.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="flex flex-col items-center">
                    <Logo/>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">{title}</h2>
                    {subtitle.map(|s| view! { <p class="mt-2 text-center text-sm text-gray-600">{s}</p> })}
                </div>
                <div class="bg-white shadow rounded-lg px-6 py-8">{children()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn UserLayout(children: Children) -> impl IntoView {
    let stores = use_stores();
    let badge = move || {
        stores
            .user_auth
            .with(|s| s.user.as_ref().map(|u| initials(&u.name)))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <Logo/>
                    <nav class="hidden md:flex items-center space-x-6">
                        {USER_NAV
                            .iter()
                            .map(|&(href, label)| view! {
                                <A href=href class="text-sm font-medium text-gray-600 hover:text-blue-600" active_class="text-blue-600">
                                    {label}
                                </A>
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-4">
                        <span class="w-8 h-8 rounded-full bg-blue-100 text-blue-700 text-sm font-semibold flex items-center justify-center">
                            {badge}
                        </span>
                        <LogoutButton/>
                    </div>
                </div>
            </header>
            <main class="container mx-auto px-4 py-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let stores = use_stores();
    let admin_name = move || {
        stores
            .admin_auth
            .with(|s| s.admin.as_ref().map(|a| a.name.clone()))
            .unwrap_or_else(|| "Admin".to_string())
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <aside class="fixed inset-y-0 left-0 w-64 bg-gray-900 text-white flex flex-col">
                <div class="px-6 py-5 text-lg font-bold">"SEO Master Pro Admin"</div>
                <nav class="flex-1 px-4 space-y-1">
                    {ADMIN_NAV
                        .iter()
                        .map(|&(href, label)| view! {
                            <A href=href class="block px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:bg-gray-800 hover:text-white" active_class="bg-gray-800 text-white">
                                {label}
                            </A>
                        })
                        .collect_view()}
                </nav>
                <div class="px-6 py-4 border-t border-gray-800 flex items-center justify-between">
                    <span class="text-sm text-gray-300">{admin_name}</span>
                    <LogoutButton/>
                </div>
            </aside>
            <main class="pl-64">
                <div class="px-8 py-8">{children()}</div>
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 pb-5 mb-6">
            <h1 class="text-3xl font-bold leading-tight tracking-tight text-gray-900">{title}</h1>
            {description.map(|desc| view! { <p class="mt-2 text-sm text-gray-700">{desc}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-8 text-blue-600">
            <Spinner size="h-8 w-8"/>
            <span class="text-gray-600">{label}</span>
        </div>
    }
}
