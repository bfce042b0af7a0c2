//! Routing of user-facing notifications.

use crate::bridge::{HostBridge, LocalDialogs};
use log::debug;
use shared::{NotificationSeverity, PopupButton, PopupParams};

/// Popup shown by the host for a notification
pub fn notification_popup(message: &str, severity: NotificationSeverity) -> PopupParams {
    PopupParams {
        title: severity.title().to_string(),
        message: message.to_string(),
        buttons: vec![PopupButton::ok()],
    }
}

/// Show `message` through the host popup when running inside the host,
/// otherwise through a blocking local alert.
pub fn notify(
    bridge: Option<&dyn HostBridge>,
    dialogs: &dyn LocalDialogs,
    message: &str,
    severity: NotificationSeverity,
) {
    debug!("Notify [{:?}] {}", severity, message);
    match bridge {
        Some(bridge) => bridge.show_popup(&notification_popup(message, severity), None),
        None => dialogs.alert(message),
    }
}
