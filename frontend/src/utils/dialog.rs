/// Blocking message box. Off the browser the text only reaches the log.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown: {}", message);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    log::info!("alert: {}", message);
}
