//! Capabilities the mini app borrows from its surroundings.
//!
//! [`HostBridge`] is the messaging platform's embedded-app object. It is
//! optional: when the page is opened outside the host, the session runs in
//! standalone mode and falls back to [`LocalDialogs`] for anything the user
//! has to see.

use shared::{BridgeUser, PopupParams};

/// Called with the id of the pressed popup button, or `None` when the popup
/// was dismissed without one.
pub type PopupCallback = Box<dyn FnOnce(Option<String>)>;

pub trait HostBridge {
    /// User the host launched the app for
    fn user(&self) -> Option<BridgeUser>;

    /// Launch parameter passed by the bot, if any
    fn start_param(&self) -> Option<String>;

    /// One-way message to the bot. No acknowledgement is available.
    fn send_data(&self, data: &str);

    fn show_popup(&self, popup: &PopupParams, on_close: Option<PopupCallback>);

    fn open_link(&self, url: &str);

    /// Tell the host the app is ready to be shown
    fn ready(&self);

    /// Expand the embedded view to full height
    fn expand(&self);

    /// Close the mini app
    fn close(&self);
}

/// Blocking in-page dialogs used in standalone mode
pub trait LocalDialogs {
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `true` when the user accepted
    fn confirm(&self, message: &str) -> bool;
}
