// Notification components
use crate::timer::ScheduledCallback;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "bg-red-50 border-red-200 text-red-800",
            AlertKind::Success => "bg-green-50 border-green-200 text-green-800",
            AlertKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
        }
    }
}

/// Renders while `message` holds something. Dismissing clears it.
#[component]
pub fn Alert(
    message: RwSignal<Option<String>>,
    #[prop(optional)] kind: AlertKind,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class=format!("rounded-md border p-4 flex justify-between items-start {}", kind.class()) role="alert">
                    <p class="text-sm font-medium">{text}</p>
                    <button
                        type="button"
                        class="ml-4 text-sm opacity-70 hover:opacity-100"
                        aria-label="Dismiss"
                        on:click=move |_| message.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Short-lived confirmation shown in the corner of admin pages.
#[derive(Clone)]
pub struct Toaster {
    pub message: RwSignal<Option<String>>,
    hide: ScheduledCallback,
}

impl Toaster {
    const VISIBLE_MS: u32 = 3000;

    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            hide: ScheduledCallback::new(),
        }
    }

    pub fn show(&self, text: impl Into<String>) {
        let message = self.message;
        message.set(Some(text.into()));
        self.hide.schedule_once(Self::VISIBLE_MS, move || {
            message.try_set(None);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toast(toaster: Toaster) -> impl IntoView {
    let message = toaster.message;
    move || {
        message.get().map(|text| {
            view! {
                <div class="fixed bottom-4 right-4 z-50 rounded-md bg-gray-900 text-white px-4 py-3 shadow-lg text-sm">
                    {text}
                </div>
            }
        })
    }
}
