use leptos::*;

/// Page frame. Dark hosts get the dark surface tokens.
#[component]
pub fn Layout(#[prop(optional)] dark: bool, children: Children) -> impl IntoView {
    let surface = if dark {
        "min-h-screen bg-surface text-fg theme-dark"
    } else {
        "min-h-screen bg-surface text-fg"
    };
    view! {
        <div class=surface>
            <main class="relative max-w-7xl mx-auto py-6 sm:px-6 lg:px-8" style="position: relative; isolation: isolate;">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_marks_dark_hosts() {
        let html = render_to_string(|| view! { <Layout dark=true><p>"body"</p></Layout> });
        assert!(html.contains("theme-dark"));
        assert!(html.contains("body"));
        let html = render_to_string(|| view! { <Layout><p>"body"</p></Layout> });
        assert!(!html.contains("theme-dark"));
    }

    #[test]
    fn messages_render_text() {
        let html = render_to_string(|| view! { <ErrorMessage message="bad".to_string() /> });
        assert!(html.contains("bad"));
        assert!(html.contains("role=\"alert\""));
        let html = render_to_string(|| view! { <SuccessMessage message="done".to_string() /> });
        assert!(html.contains("done"));
    }
}
