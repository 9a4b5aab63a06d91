use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400 mt-auto">
            <div class="container mx-auto px-4 py-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center space-x-4 text-sm">
                        <span class="font-semibold text-white">"SEO Master Pro"</span>
                        <span>"•"</span>
                        <span>"© 2024 All rights reserved"</span>
                    </div>

                    <div class="flex items-center space-x-6 mt-4 md:mt-0 text-sm">
                        <A href="/user/plans" class="hover:text-white">"Pricing"</A>
                        <A href="/signin" class="hover:text-white">"Sign In"</A>
                        <A href="/signup" class="hover:text-white">"Create Account"</A>
                    </div>
                </div>
            </div>
        </footer>
    }
}
