use crate::components::{background::MatrixBackground, layout::Layout};
use leptos::*;

#[component]
pub fn LeaveRequestsLayout(
    #[prop(optional)] dark: bool,
    greeting: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout dark=dark>
            <MatrixBackground />
            <div class="relative space-y-6" style="position: relative; z-index: 1;">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{"Leave Requests"}</h2>
                    {greeting.map(|name| view! {
                        <p class="mt-1 text-sm text-fg-muted">{format!("Signed in as {}", name)}</p>
                    })}
                </div>
                {children()}
            </div>
        </Layout>
    }
}
