use finance_tracker_domain::LocalDialogs;
use log::warn;

/// Blocking `window.alert` / `window.confirm`
pub struct BrowserDialogs;

impl LocalDialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window to show alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!("Alert failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            warn!("No window to confirm: {}", message);
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            warn!("Confirm failed: {:?}", e);
            false
        })
    }
}
