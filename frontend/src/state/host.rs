use leptos::*;

/// What the host page knows about the session: who is signed in and how the
/// page is themed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostContext {
    pub user_email: String,
    pub user_display_name: Option<String>,
    pub is_dark_theme: bool,
    pub list_title: String,
}

#[component]
pub fn HostContextProvider(context: HostContext, children: Children) -> impl IntoView {
    provide_context(context);
    view! { <>{children()}</> }
}

pub fn use_host_context() -> HostContext {
    use_context::<HostContext>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_host_context_reads_provided_identity() {
        with_runtime(|| {
            provide_context(HostContext {
                user_email: "alice@example.com".into(),
                ..HostContext::default()
            });
            assert_eq!(use_host_context().user_email, "alice@example.com");
        });
    }

    #[test]
    fn use_host_context_defaults_to_anonymous() {
        with_runtime(|| {
            assert!(use_host_context().user_email.is_empty());
        });
    }
}
