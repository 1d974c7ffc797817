use crate::components::layout::{ErrorMessage, LoadingSpinner, SuccessMessage};
use crate::pages::leave_requests::{
    types::{LeaveRequest, LIST_COLUMNS},
    utils::MessageState,
};
use leptos::*;

/// Rows carry no store id, so the whole record is the key. A refetched row
/// whose fields changed gets a fresh view.
fn row_key(index: usize, record: &LeaveRequest) -> (usize, LeaveRequest) {
    (index, record.clone())
}

#[component]
pub fn LeaveRequestsList(
    requests: Signal<Vec<LeaveRequest>>,
    loading: Signal<bool>,
    message: Signal<MessageState>,
    on_select: Callback<LeaveRequest>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <Show when=move || message.with(|m| m.success.is_some())>
                <div class="px-6 pt-4">
                    <SuccessMessage message=message.get().success.unwrap_or_default() />
                </div>
            </Show>
            <Show when=move || message.with(|m| m.error.is_some())>
                <div class="px-6 pt-4">
                    <ErrorMessage message=message.get().error.map(|e| e.error).unwrap_or_default() />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-fg-muted">
                    <LoadingSpinner />
                    <span>{"Loading leave requests..."}</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && requests.with(Vec::is_empty)>
                <div class="px-6 py-4 text-sm text-fg-muted">
                    {"You have no leave requests yet."}
                </div>
            </Show>
            <Show when=move || requests.with(|r| !r.is_empty())>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                {LIST_COLUMNS
                                    .iter()
                                    .map(|column| view! {
                                        <th
                                            class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider"
                                            data-field=column.key()
                                        >
                                            {column.label()}
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || requests.get().into_iter().enumerate()
                                key=|(index, record)| row_key(*index, record)
                                children=move |(_, record): (usize, LeaveRequest)| {
                                    let record = store_value(record);
                                    view! {
                                        <tr
                                            class="hover:bg-action-ghost-bg-hover cursor-pointer"
                                            on:click=move |_| on_select.call(record.get_value())
                                        >
                                            {LIST_COLUMNS
                                                .iter()
                                                .map(|column| view! {
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                        {record.with_value(|r| column.cell(r))}
                                                    </td>
                                                })
                                                .collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
