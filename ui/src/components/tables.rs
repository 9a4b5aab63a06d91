// Table components
use leptos::*;

#[component]
pub fn DataTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white shadow rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                    {*header}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">{children()}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-6 py-8 text-center text-sm text-gray-500">{message}</td>
        </tr>
    }
}

#[component]
pub fn Badge(#[prop(into)] class: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", class)>
            {label}
        </span>
    }
}
