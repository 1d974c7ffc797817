use crate::api::ApiError;
use leptos::*;

/// Shows the message of an [`ApiError`]. Store failures also show their code so
/// support can tell an outage from a permission problem.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .filter(|e| e.code != "VALIDATION_ERROR" && !e.code.is_empty())
                        .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> })
                }}
            </div>
        </Show>
    }
}
