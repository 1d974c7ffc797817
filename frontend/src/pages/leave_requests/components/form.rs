use crate::api::LeaveType;
use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::leave_requests::utils::{FormEdit, LeaveForm, MessageState};
use crate::utils::time::{format_input_date, parse_input_date};
use leptos::*;

fn leave_type_choices(current: Option<&LeaveType>) -> Vec<LeaveType> {
    let mut choices = LeaveType::OPTIONS.to_vec();
    if let Some(other @ LeaveType::Other(_)) = current {
        if !other.is_blank() {
            choices.push(other.clone());
        }
    }
    choices
}

fn leave_type_from_input(raw: &str) -> Option<LeaveType> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(LeaveType::from_store(raw))
    }
}

#[component]
pub fn LeaveRequestForm(
    form: Signal<LeaveForm>,
    read_only: Signal<bool>,
    submitting: Signal<bool>,
    message: Signal<MessageState>,
    on_edit: Callback<FormEdit>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let error = Signal::derive(move || message.with(|m| m.error.clone()));
    let heading = move || {
        if read_only.get() {
            "Leave Request Details"
        } else {
            "New Leave Request"
        }
    };
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !read_only.get_untracked() {
            on_submit.call(());
        }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{heading}</h3>
            <InlineErrorMessage error=error />
            <Show when=move || message.with(|m| m.success.is_some())>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" novalidate=true on:submit=handle_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Employee Name"}</label>
                    <input
                        type="text"
                        name="employee_name"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        disabled=move || read_only.get()
                        prop:value=move || form.with(|f| f.employee_name.clone())
                        on:input=move |ev| on_edit.call(FormEdit::EmployeeName(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">
                        {"Employee Email"}<span class="text-status-error-text">{" *"}</span>
                    </label>
                    <input
                        type="text"
                        name="employee_email"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        disabled=move || read_only.get()
                        prop:value=move || form.with(|f| f.employee_email.clone())
                        on:input=move |ev| on_edit.call(FormEdit::EmployeeEmail(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Leave Type"}</label>
                    <select
                        name="leave_type"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        disabled=move || read_only.get()
                        prop:value=move || {
                            form.with(|f| {
                                f.leave_type
                                    .as_ref()
                                    .map(|t| t.as_str().to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:change=move |ev| {
                            on_edit.call(FormEdit::LeaveType(leave_type_from_input(&event_target_value(&ev))))
                        }
                    >
                        <option value="">{"Select leave type"}</option>
                        {move || {
                            let current = form.with(|f| f.leave_type.clone());
                            leave_type_choices(current.as_ref())
                                .into_iter()
                                .map(|choice| {
                                    let selected = current.as_ref() == Some(&choice);
                                    let key = choice.as_str().to_string();
                                    view! {
                                        <option value=key.clone() selected=selected>{key}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">{"Start Date"}</label>
                        <input
                            type="date"
                            name="start_date"
                            placeholder="Select start date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            disabled=move || read_only.get()
                            prop:value=move || form.with(|f| format_input_date(f.start_date))
                            on:input=move |ev| {
                                on_edit.call(FormEdit::StartDate(parse_input_date(&event_target_value(&ev))))
                            }
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">{"End Date"}</label>
                        <input
                            type="date"
                            name="end_date"
                            placeholder="Select end date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            disabled=move || read_only.get()
                            prop:value=move || form.with(|f| format_input_date(f.end_date))
                            on:input=move |ev| {
                                on_edit.call(FormEdit::EndDate(parse_input_date(&event_target_value(&ev))))
                            }
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">{"Approver Email"}</label>
                    <input
                        type="text"
                        name="approver_email"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        disabled=move || read_only.get()
                        prop:value=move || form.with(|f| f.approver_email.clone())
                        on:input=move |ev| on_edit.call(FormEdit::ApproverEmail(event_target_value(&ev)))
                    />
                </div>
                <Show when=move || !read_only.get()>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </Show>
            </form>
        </div>
    }
}
