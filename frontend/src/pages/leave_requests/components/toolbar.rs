use leptos::*;

#[component]
pub fn RequestsToolbar(on_show_list: Callback<()>, on_new_request: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex gap-3 mb-3">
            <button
                type="button"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                on:click=move |_| on_show_list.call(())
            >
                {"My Leave Requests"}
            </button>
            <button
                type="button"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                on:click=move |_| on_new_request.call(())
            >
                {"New Leave Request"}
            </button>
        </div>
    }
}
