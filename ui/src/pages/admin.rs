use crate::admin::payments::status_from_value;
use crate::admin::{DateRange, NewPlan, PaymentFilter, PaymentLedger, PlanTable, UserDirectory, UserFilter};
use crate::api::use_backend;
use crate::components::buttons::{Button, ButtonVariant};
use crate::components::cards::StatCard;
use crate::components::layout::{LoadingSpinner, PageHeader};
use crate::components::modals::{ConfirmModal, Modal};
use crate::components::notifications::{Alert, Toast, Toaster};
use crate::components::tables::{Badge, DataTable, EmptyRow};
use crate::controller::SubmitState;
use crate::timer::{spawn_cancellable, TaskScope};
use crate::types::{ManagedUser, PaymentRecord, PaymentStatus, PlanRecord, PlanTier};
use crate::utils::{format_amount, format_datetime, format_price, format_relative_time};
use chrono::Utc;
use leptos::*;

const INPUT_CLASS: &str =
    "px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-blue-500";

fn parse_number<T: std::str::FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

// Plans

#[component]
pub fn AdminPlansPage() -> impl IntoView {
    let backend = use_backend();
    let scope = TaskScope::new();
    let load = SubmitState::new();
    let action = SubmitState::new();
    let toaster = Toaster::new();
    let table = create_rw_signal(PlanTable::default());
    let pending_delete = create_rw_signal(None::<String>);
    let show_delete = create_rw_signal(false);
    let show_add = create_rw_signal(false);

    spawn_cancellable({
        let backend = backend.clone();
        async move {
            if let Some(plans) = load.run("list-plans", backend.list_plans()).await {
                table.try_set(PlanTable::new(plans));
            }
        }
    });

    // Sends a row to the backend. The table keeps the copy it returns, or
    // goes back to `previous` when the write fails.
    let persist = Callback::new({
        let backend = backend.clone();
        let toaster = toaster.clone();
        move |(plan, previous, done): (PlanRecord, Option<PlanRecord>, &'static str)| {
            let backend = backend.clone();
            let toaster = toaster.clone();
            scope.spawn(async move {
                let id = plan.id.clone();
                let saved = action.run("save-plan", backend.save_plan(plan)).await;
                let stored = saved.is_some();
                table.try_update(|t| t.settle(&id, previous, saved));
                if stored {
                    toaster.show(done);
                }
            });
        }
    });

    let on_save_edit = Callback::new(move |_: ()| {
        let saved = table.try_update(|t| {
            let previous = t.editing().and_then(|form| t.get(&form.id)).cloned();
            t.save().map(|plan| (plan, previous))
        });
        match saved {
            Some(Ok((plan, previous))) => persist.call((plan, previous, "Plan updated successfully")),
            Some(Err(err)) => action.error.set(Some(err.to_string())),
            None => {}
        }
    });

    let on_toggle = Callback::new(move |id: String| {
        let toggled = table
            .try_update(|t| {
                let previous = t.get(&id).cloned();
                t.toggle_active(&id).map(|plan| (plan.clone(), previous))
            })
            .and_then(Result::ok);
        if let Some((plan, previous)) = toggled {
            let done = if plan.is_active { "Plan activated" } else { "Plan deactivated" };
            persist.call((plan, previous, done));
        }
    });

    let on_request_delete = Callback::new(move |id: String| {
        pending_delete.set(Some(id));
        show_delete.set(true);
    });

    let on_confirm_delete = Callback::new({
        let toaster = toaster.clone();
        move |_: ()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            let backend = backend.clone();
            let toaster = toaster.clone();
            scope.spawn(async move {
                if action.run("delete-plan", backend.delete_plan(&id)).await.is_some() {
                    table.try_update(|t| {
                        if let Err(err) = t.delete(&id) {
                            log::debug!("plan already gone locally: {}", err);
                        }
                    });
                    pending_delete.try_set(None);
                    toaster.show("Plan deleted successfully");
                }
            });
        }
    });

    let delete_message = Signal::derive(move || {
        let name = pending_delete
            .get()
            .and_then(|id| table.with(|t| t.get(&id).map(|p| p.name.clone())))
            .unwrap_or_else(|| "this plan".to_string());
        format!("Are you sure you want to delete {}? This action cannot be undone.", name)
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-start justify-between">
                <PageHeader title="Plan Management" description="Create, edit and retire subscription plans"/>
                <Button on_click=move |_: ev::MouseEvent| show_add.set(true)>"Add New Plan"</Button>
            </div>

            <Alert message=load.error/>
            <Alert message=action.error/>

            <Show when=move || !load.loading.get() fallback=|| view! { <LoadingSpinner label="Loading plans..."/> }>
                <DataTable headers=&["Plan", "Monthly", "Yearly", "Optimizations", "Status", "Actions"]>
                    <Show
                        when=move || table.with(|t| !t.plans().is_empty())
                        fallback=|| view! { <EmptyRow colspan=6 message="No plans yet"/> }
                    >
                        <For
                            each=move || table.with(|t| t.plans().iter().map(|p| p.id.clone()).collect::<Vec<_>>())
                            key=|id| id.clone()
                            children=move |id| view! {
                                <PlanRow
                                    table=table
                                    id=id
                                    on_save=on_save_edit
                                    on_toggle=on_toggle
                                    on_delete=on_request_delete
                                />
                            }
                        />
                    </Show>
                </DataTable>
            </Show>

            <AddPlanModal show=show_add table=table persist=persist/>
            <ConfirmModal
                title="Delete Plan"
                message=delete_message
                show=show_delete
                on_confirm=on_confirm_delete
                confirm_label="Delete"
            />
            <Toast toaster=toaster/>
        </div>
    }
}

#[component]
fn PlanRow(
    table: RwSignal<PlanTable>,
    id: String,
    on_save: Callback<()>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = store_value(id);
    let field = move |read: fn(&PlanRecord) -> String| {
        move || table.with(|t| id.with_value(|id| t.get(id).map(read)).unwrap_or_default())
    };
    let editing = move || table.with(|t| id.with_value(|id| t.is_editing(id)));
    let is_active = move || table.with(|t| id.with_value(|id| t.get(id).is_some_and(|p| p.is_active)));

    let edit_text = move |read: fn(&PlanRecord) -> String| {
        move || table.with(|t| t.editing().map(read).unwrap_or_default())
    };

    view! {
        <tr>
            <Show
                when=editing
                fallback=move || view! {
                    <td class="px-6 py-4 text-sm text-gray-900">
                        <p class="font-medium">{field(|p| p.name.clone())}</p>
                        <p class="text-xs text-gray-500">{field(|p| p.features.join(", "))}</p>
                    </td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{field(|p| format_price(p.monthly_price))}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{field(|p| format_price(p.yearly_price))}</td>
                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{field(PlanRecord::optimizations_label)}</td>
                }
            >
                <td class="px-6 py-4">
                    <input
                        type="text"
                        class=INPUT_CLASS
                        prop:value=edit_text(|p| p.name.clone())
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            table.update(|t| t.update_edit(|p| p.name = name));
                        }
                    />
                </td>
                <td class="px-6 py-4">
                    <input
                        type="number"
                        min="0"
                        class=format!("{} w-24", INPUT_CLASS)
                        prop:value=edit_text(|p| p.monthly_price.to_string())
                        on:input=move |ev| {
                            let price = parse_number(&event_target_value(&ev));
                            table.update(|t| t.update_edit(|p| p.monthly_price = price));
                        }
                    />
                </td>
                <td class="px-6 py-4">
                    <input
                        type="number"
                        min="0"
                        class=format!("{} w-24", INPUT_CLASS)
                        prop:value=edit_text(|p| p.yearly_price.to_string())
                        on:input=move |ev| {
                            let price = parse_number(&event_target_value(&ev));
                            table.update(|t| t.update_edit(|p| p.yearly_price = price));
                        }
                    />
                </td>
                <td class="px-6 py-4">
                    <input
                        type="number"
                        min="-1"
                        class=format!("{} w-24", INPUT_CLASS)
                        prop:value=edit_text(|p| p.max_optimizations.to_string())
                        on:input=move |ev| {
                            let max = parse_number::<i32>(&event_target_value(&ev)).max(-1);
                            table.update(|t| t.update_edit(|p| p.max_optimizations = max));
                        }
                    />
                </td>
            </Show>
            <td class="px-6 py-4 whitespace-nowrap">
                <button
                    type="button"
                    class=move || if is_active() {
                        "px-2 text-xs leading-5 font-semibold rounded-full bg-green-100 text-green-800"
                    } else {
                        "px-2 text-xs leading-5 font-semibold rounded-full bg-gray-100 text-gray-800"
                    }
                    on:click=move |_| on_toggle.call(id.get_value())
                >
                    {move || if is_active() { "Active" } else { "Inactive" }}
                </button>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium space-x-3">
                <Show
                    when=editing
                    fallback=move || view! {
                        <button
                            type="button"
                            class="text-blue-600 hover:text-blue-900"
                            on:click=move |_| {
                                if let Some(Err(err)) = table.try_update(|t| t.begin_edit(&id.get_value())) {
                                    log::warn!("edit ignored: {}", err);
                                }
                            }
                        >
                            "Edit"
                        </button>
                        <button type="button" class="text-red-600 hover:text-red-900" on:click=move |_| on_delete.call(id.get_value())>
                            "Delete"
                        </button>
                    }
                >
                    <button type="button" class="text-green-600 hover:text-green-900" on:click=move |_| on_save.call(())>
                        "Save"
                    </button>
                    <button type="button" class="text-gray-600 hover:text-gray-900" on:click=move |_| table.update(PlanTable::cancel_edit)>
                        "Cancel"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

#[component]
fn AddPlanModal(
    show: RwSignal<bool>,
    table: RwSignal<PlanTable>,
    persist: Callback<(PlanRecord, Option<PlanRecord>, &'static str)>,
) -> impl IntoView {
    let draft = create_rw_signal(NewPlan::default());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match table.try_update(|t| t.add(draft.get_untracked())) {
            Some(Ok(plan)) => {
                persist.call((plan, None, "Plan added successfully"));
                draft.set(NewPlan::default());
                error.set(None);
                show.set(false);
            }
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => {}
        }
    };

    view! {
        <Modal title="Add New Plan" show=show>
            <form class="space-y-4" on:submit=submit>
                <Alert message=error/>
                <label class="block text-sm font-medium text-gray-700">
                    "Plan Name"
                    <input
                        type="text"
                        class=format!("{} mt-1 w-full", INPUT_CLASS)
                        placeholder="e.g., Professional"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <div class="grid grid-cols-2 gap-4">
                    <label class="block text-sm font-medium text-gray-700">
                        "Monthly Price ($)"
                        <input
                            type="number"
                            min="0"
                            class=format!("{} mt-1 w-full", INPUT_CLASS)
                            prop:value=move || draft.with(|d| d.monthly_price.to_string())
                            on:input=move |ev| draft.update(|d| d.monthly_price = parse_number(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="block text-sm font-medium text-gray-700">
                        "Yearly Price ($)"
                        <input
                            type="number"
                            min="0"
                            class=format!("{} mt-1 w-full", INPUT_CLASS)
                            prop:value=move || draft.with(|d| d.yearly_price.to_string())
                            on:input=move |ev| draft.update(|d| d.yearly_price = parse_number(&event_target_value(&ev)))
                        />
                    </label>
                </div>
                <label class="block text-sm font-medium text-gray-700">
                    "Max Optimizations (-1 for unlimited)"
                    <input
                        type="number"
                        min="-1"
                        class=format!("{} mt-1 w-full", INPUT_CLASS)
                        prop:value=move || draft.with(|d| d.max_optimizations.to_string())
                        on:input=move |ev| draft.update(|d| d.max_optimizations = parse_number(&event_target_value(&ev)))
                    />
                </label>
                <label class="block text-sm font-medium text-gray-700">
                    "Features (comma-separated)"
                    <textarea
                        rows="3"
                        class=format!("{} mt-1 w-full", INPUT_CLASS)
                        placeholder="e.g., 20 optimizations per month, Email support"
                        prop:value=move || draft.with(|d| d.features.clone())
                        on:input=move |ev| draft.update(|d| d.features = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="flex justify-end space-x-3 pt-2">
                    <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| show.set(false)>"Cancel"</Button>
                    <Button button_type="submit">"Add Plan"</Button>
                </div>
            </form>
        </Modal>
    }
}

// Users

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let backend = use_backend();
    let scope = TaskScope::new();
    let load = SubmitState::new();
    let action = SubmitState::new();
    let toaster = Toaster::new();
    let directory = create_rw_signal(UserDirectory::default());
    let filter = create_rw_signal(UserFilter::default());

    spawn_cancellable({
        let backend = backend.clone();
        async move {
            if let Some(users) = load.run("list-users", backend.list_users()).await {
                directory.try_set(UserDirectory::new(users));
            }
        }
    });

    let on_toggle = Callback::new({
        let toaster = toaster.clone();
        move |(id, suspend): (String, bool)| {
            let backend = backend.clone();
            let toaster = toaster.clone();
            scope.spawn(async move {
                if action.run("set-user-suspended", backend.set_user_suspended(&id, suspend)).await.is_some() {
                    directory.try_update(|d| {
                        if let Err(err) = d.set_suspended(&id, suspend) {
                            log::debug!("user missing locally: {}", err);
                        }
                    });
                    toaster.show(if suspend { "User suspended" } else { "User reactivated" });
                }
            });
        }
    });

    let total = Signal::derive(move || directory.with(|d| d.users().len().to_string()));
    let active = Signal::derive(move || directory.with(|d| d.active_count().to_string()));
    let suspended = Signal::derive(move || directory.with(|d| (d.users().len() - d.active_count()).to_string()));

    view! {
        <div class="space-y-6">
            <PageHeader title="User Management" description="Search accounts and control access"/>

            <div class="grid grid-cols-1 gap-5 sm:grid-cols-3">
                <StatCard title="Total Users" value=total/>
                <StatCard title="Active Users" value=active accent="green"/>
                <StatCard title="Suspended" value=suspended accent="red"/>
            </div>

            <Alert message=load.error/>
            <Alert message=action.error/>

            <div class="flex flex-col sm:flex-row gap-4">
                <input
                    type="text"
                    class=format!("{} flex-1", INPUT_CLASS)
                    placeholder="Search by name or email..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        let tier = PlanTier::from_label(&event_target_value(&ev));
                        filter.update(|f| f.subscription = tier);
                    }
                >
                    <option value="all">"All Subscriptions"</option>
                    {PlanTier::ALL
                        .into_iter()
                        .map(|tier| view! { <option value=tier.label()>{tier.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || !load.loading.get() fallback=|| view! { <LoadingSpinner label="Loading users..."/> }>
                <DataTable headers=&["User", "Subscription", "Last Active", "Status", "Actions"]>
                    {move || {
                        let users = directory.with(|d| filter.with(|f| d.filtered(f)));
                        if users.is_empty() {
                            view! { <EmptyRow colspan=5 message="No users match your filters"/> }.into_view()
                        } else {
                            users
                                .into_iter()
                                .map(|user| view! { <UserRow user=user on_toggle=on_toggle/> })
                                .collect_view()
                        }
                    }}
                </DataTable>
            </Show>
            <Toast toaster=toaster/>
        </div>
    }
}

#[component]
fn UserRow(user: ManagedUser, on_toggle: Callback<(String, bool)>) -> impl IntoView {
    let ManagedUser {
        id,
        name,
        email,
        last_active,
        subscription,
        is_suspended,
    } = user;

    let (status_class, status_label) = if is_suspended {
        ("bg-red-100 text-red-800", "Suspended")
    } else {
        ("bg-green-100 text-green-800", "Active")
    };
    let (action_class, action_label) = if is_suspended {
        ("text-green-600 hover:text-green-900", "Reactivate")
    } else {
        ("text-red-600 hover:text-red-900", "Suspend")
    };

    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap">
                <p class="text-sm font-medium text-gray-900">{name}</p>
                <p class="text-sm text-gray-500">{email}</p>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <Badge class="bg-blue-100 text-blue-800" label=subscription.label()/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_relative_time(&last_active)}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <Badge class=status_class label=status_label/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <button type="button" class=action_class on:click=move |_| on_toggle.call((id.clone(), !is_suspended))>
                    {action_label}
                </button>
            </td>
        </tr>
    }
}

// Payments

#[component]
pub fn AdminPaymentsPage() -> impl IntoView {
    let backend = use_backend();
    let scope = TaskScope::new();
    let load = SubmitState::new();
    let action = SubmitState::new();
    let toaster = Toaster::new();
    let ledger = create_rw_signal(PaymentLedger::default());
    let filter = create_rw_signal(PaymentFilter::default());
    let pending_refund = create_rw_signal(None::<PaymentRecord>);
    let show_refund = create_rw_signal(false);

    spawn_cancellable({
        let backend = backend.clone();
        async move {
            if let Some(payments) = load.run("list-payments", backend.list_payments()).await {
                ledger.try_set(PaymentLedger::new(payments));
            }
        }
    });

    let on_request_refund = Callback::new(move |payment: PaymentRecord| {
        pending_refund.set(Some(payment));
        show_refund.set(true);
    });

    let on_confirm_refund = Callback::new({
        let toaster = toaster.clone();
        move |_: ()| {
            let Some(payment) = pending_refund.get_untracked() else {
                return;
            };
            if !ledger.with_untracked(|l| l.can_refund(&payment.id)) {
                action.error.set(Some("Only successful payments can be refunded".to_string()));
                return;
            }
            let backend = backend.clone();
            let toaster = toaster.clone();
            scope.spawn(async move {
                if action.run("refund-payment", backend.refund_payment(&payment.id)).await.is_some() {
                    ledger.try_update(|l| {
                        if let Err(err) = l.refund(&payment.id) {
                            log::debug!("ledger out of sync: {}", err);
                        }
                    });
                    pending_refund.try_set(None);
                    toaster.show("Payment refunded successfully");
                }
            });
        }
    });

    let refund_message = Signal::derive(move || {
        pending_refund.with(|p| match p {
            Some(p) => format!(
                "Refund {} to {} ({})? This action cannot be undone.",
                format_amount(p.amount, &p.currency),
                p.user_name,
                p.transaction_id
            ),
            None => String::new(),
        })
    });

    let stats = create_memo(move |_| ledger.with(PaymentLedger::stats));
    let revenue = Signal::derive(move || format_amount(stats.get().total_revenue, "USD"));
    let successful = Signal::derive(move || stats.get().successful.to_string());
    let failed = Signal::derive(move || stats.get().failed.to_string());
    let pending = Signal::derive(move || stats.get().pending.to_string());

    view! {
        <div class="space-y-6">
            <PageHeader title="Payment Management" description="Track transactions and issue refunds"/>

            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Revenue" value=revenue accent="green"/>
                <StatCard title="Successful" value=successful/>
                <StatCard title="Failed" value=failed accent="red"/>
                <StatCard title="Pending" value=pending accent="yellow"/>
            </div>

            <Alert message=load.error/>
            <Alert message=action.error/>

            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    class=format!("{} flex-1", INPUT_CLASS)
                    placeholder="Search by name, email, or transaction ID..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        let status = status_from_value(&event_target_value(&ev));
                        filter.update(|f| f.status = status);
                    }
                >
                    <option value="all">"All Status"</option>
                    <option value="success">"Success"</option>
                    <option value="failed">"Failed"</option>
                    <option value="pending">"Pending"</option>
                    <option value="refunded">"Refunded"</option>
                </select>
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        let range = DateRange::from_value(&event_target_value(&ev));
                        filter.update(|f| f.range = range);
                    }
                >
                    {DateRange::ALL
                        .into_iter()
                        .map(|range| view! { <option value=range.value()>{range.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || !load.loading.get() fallback=|| view! { <LoadingSpinner label="Loading payments..."/> }>
                <DataTable headers=&["Transaction", "User", "Plan", "Amount", "Method", "Date", "Status", "Actions"]>
                    {move || {
                        let now = Utc::now().naive_utc();
                        let payments = ledger.with(|l| filter.with(|f| l.filtered(f, now)));
                        if payments.is_empty() {
                            view! { <EmptyRow colspan=8 message="No payments match your filters"/> }.into_view()
                        } else {
                            payments
                                .into_iter()
                                .map(|payment| view! { <PaymentRow payment=payment on_refund=on_request_refund/> })
                                .collect_view()
                        }
                    }}
                </DataTable>
            </Show>

            <ConfirmModal
                title="Refund Payment"
                message=refund_message
                show=show_refund
                on_confirm=on_confirm_refund
                confirm_label="Refund"
            />
            <Toast toaster=toaster/>
        </div>
    }
}

#[component]
fn PaymentRow(payment: PaymentRecord, on_refund: Callback<PaymentRecord>) -> impl IntoView {
    let refundable = payment.status == PaymentStatus::Success;
    let status = payment.status;
    let record = store_value(payment.clone());

    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-gray-900">{payment.transaction_id}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <p class="text-sm font-medium text-gray-900">{payment.user_name}</p>
                <p class="text-sm text-gray-500">{payment.user_email}</p>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700">{payment.plan}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_amount(payment.amount, &payment.currency)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{payment.payment_method}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_datetime(&payment.date)}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <Badge class=status.badge_class() label=status.label()/>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                {refundable.then(|| view! {
                    <button
                        type="button"
                        class="text-red-600 hover:text-red-900"
                        on:click=move |_| on_refund.call(record.get_value())
                    >
                        "Refund"
                    </button>
                })}
            </td>
        </tr>
    }
}
