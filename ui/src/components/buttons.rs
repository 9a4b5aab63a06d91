// Button components
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white focus:ring-blue-500",
            ButtonVariant::Secondary => {
                "bg-white hover:bg-gray-50 text-gray-700 border border-gray-300 focus:ring-blue-500"
            }
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white focus:ring-red-500",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 text-white focus:ring-green-500",
        }
    }
}

#[component]
pub fn Spinner(#[prop(default = "h-5 w-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg class=format!("animate-spin -ml-1 mr-3 {}", size) xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
        </svg>
    }
}

/// Button that swaps its label for a spinner while `loading` is set.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, optional)] loading: MaybeSignal<bool>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] loading_text: Option<String>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center justify-center px-4 py-2 text-sm font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.class(),
        if full_width { "w-full" } else { "" }
    );
    let loading_text = loading_text.unwrap_or_else(|| "Please wait...".to_string());
    let label = children().into_view();

    view! {
        <button
            type=button_type
            class=class
            disabled=move || loading.get() || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=move || label.clone()>
                <span class="flex items-center">
                    <Spinner/>
                    {loading_text.clone()}
                </span>
            </Show>
        </button>
    }
}
