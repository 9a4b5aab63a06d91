// Segmented one-time-password input
use crate::otp::{OtpBuffer, OtpKey};
use leptos::*;
use wasm_bindgen::JsCast;

/// One box per digit. Focus follows `OtpBuffer::active_index`, pasting
/// anywhere fills from the first box, and `on_complete` fires with the joined
/// code once every box holds a digit.
#[component]
pub fn OtpInput(
    buffer: RwSignal<OtpBuffer>,
    on_complete: Callback<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let length = buffer.with_untracked(OtpBuffer::len);
    let inputs = store_value(
        (0..length)
            .map(|_| create_node_ref::<html::Input>())
            .collect::<Vec<_>>(),
    );

    create_effect(move |_| {
        let active = buffer.with(OtpBuffer::active_index);
        if let Some(input) = inputs.with_value(|refs| refs.get(active).and_then(|r| r.get())) {
            let _ = input.focus();
        }
    });

    let finish = move |completed: Option<String>| {
        if let Some(code) = completed {
            on_complete.call(code);
        }
    };

    view! {
        <div class="flex justify-center space-x-2">
            {(0..length)
                .map(|index| {
                    let node_ref = inputs.with_value(|refs| refs[index]);
                    view! {
                        <input
                            node_ref=node_ref
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="1"
                            aria-label=format!("Digit {}", index + 1)
                            class="w-12 h-14 text-center text-2xl font-semibold border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            disabled=move || disabled.get()
                            prop:value=move || {
                                buffer.with(|b| b.digit(index).map(String::from).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                finish(buffer.try_update(|b| b.input(index, &raw)).flatten());
                            }
                            on:keydown=move |ev| {
                                if let Some(key) = OtpKey::from_key_name(&ev.key()) {
                                    ev.prevent_default();
                                    buffer.update(|b| b.key(index, key));
                                }
                            }
                            on:paste=move |ev| {
                                ev.prevent_default();
                                let pasted = ev
                                    .unchecked_ref::<web_sys::ClipboardEvent>()
                                    .clipboard_data()
                                    .and_then(|data| data.get_data("text").ok())
                                    .unwrap_or_default();
                                finish(buffer.try_update(|b| b.paste(&pasted)).flatten());
                            }
                            on:focus=move |_| buffer.update(|b| b.focus(index))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
