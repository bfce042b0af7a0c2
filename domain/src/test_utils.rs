//! In-memory bridge and dialog fakes for tests.

use crate::bridge::{HostBridge, LocalDialogs, PopupCallback};
use shared::{BridgeUser, PopupParams};
use std::cell::{Cell, RefCell};

/// Host bridge that records every call.
///
/// Popup callbacks are answered immediately with `popup_answer`.
#[derive(Default)]
pub struct RecordingBridge {
    pub user: Option<BridgeUser>,
    pub start_param: Option<String>,
    pub popup_answer: Option<String>,
    sent: RefCell<Vec<String>>,
    popups: RefCell<Vec<PopupParams>>,
    links: RefCell<Vec<String>>,
    ready_calls: Cell<u32>,
    expand_calls: Cell<u32>,
    close_calls: Cell<u32>,
}

impl RecordingBridge {
    pub fn with_user(id: i64, first_name: &str) -> Self {
        Self {
            user: Some(BridgeUser {
                id,
                first_name: first_name.to_string(),
                last_name: None,
                username: None,
            }),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    pub fn sent_json(&self) -> Vec<serde_json::Value> {
        self.sent
            .borrow()
            .iter()
            .map(|s| serde_json::from_str(s).unwrap())
            .collect()
    }

    pub fn popups(&self) -> Vec<PopupParams> {
        self.popups.borrow().clone()
    }

    pub fn links(&self) -> Vec<String> {
        self.links.borrow().clone()
    }

    pub fn ready_calls(&self) -> u32 {
        self.ready_calls.get()
    }

    pub fn expand_calls(&self) -> u32 {
        self.expand_calls.get()
    }

    pub fn close_calls(&self) -> u32 {
        self.close_calls.get()
    }
}

impl HostBridge for RecordingBridge {
    fn user(&self) -> Option<BridgeUser> {
        self.user.clone()
    }

    fn start_param(&self) -> Option<String> {
        self.start_param.clone()
    }

    fn send_data(&self, data: &str) {
        self.sent.borrow_mut().push(data.to_string());
    }

    fn show_popup(&self, popup: &PopupParams, on_close: Option<PopupCallback>) {
        self.popups.borrow_mut().push(popup.clone());
        if let Some(callback) = on_close {
            callback(self.popup_answer.clone());
        }
    }

    fn open_link(&self, url: &str) {
        self.links.borrow_mut().push(url.to_string());
    }

    fn ready(&self) {
        self.ready_calls.set(self.ready_calls.get() + 1);
    }

    fn expand(&self) {
        self.expand_calls.set(self.expand_calls.get() + 1);
    }

    fn close(&self) {
        self.close_calls.set(self.close_calls.get() + 1);
    }
}

/// Dialogs that record every prompt. Confirms are accepted unless
/// `decline_confirm` is set.
#[derive(Default)]
pub struct RecordingDialogs {
    pub decline_confirm: bool,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn declining() -> Self {
        Self {
            decline_confirm: true,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl LocalDialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        !self.decline_confirm
    }
}
