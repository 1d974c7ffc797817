use leptos::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use api::ApiClient;
use pages::LeaveRequestPage;
use state::host::HostContextProvider;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting leave request web part (wasm)");

    // env.js (window.__LEAVE_REQUEST_ENV) wins over ./config.json.
    leptos::spawn_local(async move {
        let runtime = config::await_runtime_config().await;
        let host = runtime.host_context();
        if host.user_email.is_empty() {
            log::warn!("No current user email configured; the list will stay empty");
        }
        let client = ApiClient::with_settings(runtime.client_settings());
        log::info!("Runtime config initialized for list {}", host.list_title);

        mount_to_body(move || {
            provide_context(client);
            view! {
                <HostContextProvider context=host>
                    <LeaveRequestPage />
                </HostContextProvider>
            }
        });
    });
}
