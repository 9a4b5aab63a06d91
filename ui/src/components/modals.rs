// Modal components
use crate::components::buttons::{Button, ButtonVariant};
use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    show: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-50">
                <div class="bg-white rounded-lg shadow-xl w-full max-w-lg mx-4">
                    <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900">{title.get_value()}</h3>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600"
                            aria-label="Close"
                            on:click=move |_| show.set(false)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="px-6 py-4">{children.with_value(|children| children())}</div>
                </div>
            </div>
        </Show>
    }
}

/// Yes/no dialog. `on_confirm` runs before the modal closes.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: MaybeSignal<String>,
    show: RwSignal<bool>,
    on_confirm: Callback<()>,
    #[prop(default = "Confirm")] confirm_label: &'static str,
) -> impl IntoView {
    let message = store_value(message);

    view! {
        <Modal title=title show=show>
            <p class="text-sm text-gray-600">{move || message.with_value(|m| m.get())}</p>
            <div class="mt-6 flex justify-end space-x-3">
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| show.set(false)>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=move |_: ev::MouseEvent| {
                        on_confirm.call(());
                        show.set(false);
                    }
                >
                    {confirm_label}
                </Button>
            </div>
        </Modal>
    }
}
