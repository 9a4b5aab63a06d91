// Form components bound to a shared `FormState`
use crate::validation::{parse, FieldValue, FormData, FormSchema, ValidationErrors};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full px-3 py-2 border rounded-md shadow-sm text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

/// Raw input of one form plus the messages from its last validation.
#[derive(Clone, Copy)]
pub struct FormState {
    pub data: RwSignal<FormData>,
    pub errors: RwSignal<ValidationErrors>,
}

impl FormState {
    pub fn new(initial: FormData) -> Self {
        Self {
            data: create_rw_signal(initial),
            errors: create_rw_signal(ValidationErrors::default()),
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.data.with(|d| d.text(name).to_string())
    }

    pub fn set_text(&self, name: &str, value: String) {
        self.data.update(|d| d.set(name, FieldValue::Text(value)));
        self.errors.update(|e| e.remove(name));
    }

    pub fn flag(&self, name: &str) -> bool {
        self.data.with(|d| d.flag(name))
    }

    pub fn set_flag(&self, name: &str, value: bool) {
        self.data.update(|d| d.set(name, FieldValue::Flag(value)));
    }

    pub fn has_item(&self, name: &str, item: &str) -> bool {
        self.data.with(|d| d.list(name).iter().any(|v| v == item))
    }

    pub fn toggle_item(&self, name: &str, item: &str) {
        self.data.update(|d| {
            let mut items = d.list(name).to_vec();
            match items.iter().position(|v| v == item) {
                Some(index) => {
                    items.remove(index);
                }
                None => items.push(item.to_string()),
            }
            d.set(name, FieldValue::List(items));
        });
        self.errors.update(|e| e.remove(name));
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.with(|e| e.get(name).map(str::to_string))
    }

    /// Validates the current input. On failure the messages are shown next
    /// to their fields and `None` comes back.
    pub fn submit<T: FormSchema>(&self) -> Option<T> {
        let result = self.data.with_untracked(parse::<T>);
        match result {
            Ok(form) => {
                self.errors.set(ValidationErrors::default());
                Some(form)
            }
            Err(errors) => {
                log::debug!("form rejected: {:?}", errors);
                self.errors.set(errors);
                None
            }
        }
    }
}

#[component]
pub fn FieldError(form: FormState, name: &'static str) -> impl IntoView {
    move || {
        form.error(name)
            .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
    }
}

#[component]
pub fn TextField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                class=INPUT_CLASS
                class:border-red-500=move || form.error(name).is_some()
                class:border-gray-300=move || form.error(name).is_none()
                prop:value=move || form.text(name)
                on:input=move |ev| form.set_text(name, event_target_value(&ev))
            />
            <FieldError form=form name=name/>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(default = 3)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700">{label}</label>
            <textarea
                id=name
                name=name
                rows=rows
                placeholder=placeholder
                class=format!("{} border-gray-300", INPUT_CLASS)
                prop:value=move || form.text(name)
                on:input=move |ev| form.set_text(name, event_target_value(&ev))
            ></textarea>
            <FieldError form=form name=name/>
        </div>
    }
}

#[component]
pub fn SelectField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    options: &'static [(&'static str, &'static str)],
    #[prop(default = "Select an option")] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <select
                id=name
                name=name
                class=format!("{} border-gray-300 bg-white", INPUT_CLASS)
                prop:value=move || form.text(name)
                on:change=move |ev| form.set_text(name, event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|&(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form name=name/>
        </div>
    }
}

#[component]
pub fn CheckboxField(form: FormState, name: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 text-sm text-gray-700">
            <input
                type="checkbox"
                name=name
                class="h-4 w-4 text-blue-600 border-gray-300 rounded"
                prop:checked=move || form.flag(name)
                on:change=move |ev| form.set_flag(name, event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Multi-select rendered as a grid of checkboxes, stored as a list field.
#[component]
pub fn CheckboxGroup(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <fieldset>
            <legend class="block text-sm font-medium text-gray-700">
                {label}<span class="text-red-500">" *"</span>
            </legend>
            <div class="mt-2 grid grid-cols-1 gap-2 sm:grid-cols-2">
                {options
                    .iter()
                    .map(|&(value, text)| {
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-700">
                                <input
                                    type="checkbox"
                                    value=value
                                    class="h-4 w-4 text-blue-600 border-gray-300 rounded"
                                    prop:checked=move || form.has_item(name, value)
                                    on:change=move |_| form.toggle_item(name, value)
                                />
                                <span>{text}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError form=form name=name/>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::schemas::{CompleteProfileForm, SignInForm};

    #[test]
    fn test_submit_sets_and_clears_errors() {
        let runtime = create_runtime();
        let form = FormState::new(FormData::new().with_text("email", "not-an-email"));

        assert_eq!(form.submit::<SignInForm>(), None);
        assert!(form.error("email").is_some());
        assert!(form.error("password").is_some());

        form.set_text("email", "jane@example.com".to_string());
        assert_eq!(form.error("email"), None);

        form.set_text("password", "secret1".to_string());
        let parsed = form.submit::<SignInForm>().unwrap();
        assert_eq!(parsed.email, "jane@example.com");
        assert!(form.errors.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_toggle_item() {
        let runtime = create_runtime();
        let form = FormState::new(FormData::new());

        form.toggle_item("seoChallenges", "low-traffic");
        form.toggle_item("seoChallenges", "link-building");
        form.toggle_item("seoChallenges", "low-traffic");

        assert!(form.has_item("seoChallenges", "link-building"));
        assert!(!form.has_item("seoChallenges", "low-traffic"));
        assert_eq!(form.submit::<CompleteProfileForm>().map(|f| f.seo_challenges), None);
        assert_eq!(form.error("seoChallenges"), None);

        runtime.dispose();
    }
}
