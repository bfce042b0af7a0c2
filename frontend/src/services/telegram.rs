//! Host bridge over the `window.Telegram.WebApp` object.
//!
//! Every call goes through `js_sys::Reflect` so a missing or older WebApp
//! object only produces a logged warning. Nothing here panics.

use anyhow::{anyhow, Result};
use finance_tracker_domain::{HostBridge, PopupCallback};
use js_sys::{Array, Function, Reflect, JSON};
use log::{debug, warn};
use shared::{BridgeUser, PopupParams};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub struct TelegramBridge {
    web_app: JsValue,
}

impl TelegramBridge {
    /// Bridge for the current page, or `None` when the page was not opened
    /// by the host
    pub fn detect() -> Option<Self> {
        Self::from_global(&js_sys::global())
    }

    /// Bridge over `global.Telegram.WebApp` when it can deliver data to the
    /// bot. `initData` is empty for keyboard-button launches, which are the
    /// ones `sendData` works for, so it is not consulted.
    pub fn from_global(global: &JsValue) -> Option<Self> {
        let telegram = defined(Reflect::get(global, &JsValue::from_str("Telegram")).ok()?)?;
        let web_app = defined(Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?)?;

        let send_data = Reflect::get(&web_app, &JsValue::from_str("sendData")).ok()?;
        if !send_data.is_function() {
            debug!("WebApp object has no sendData, running standalone");
            return None;
        }
        Some(Self { web_app })
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue> {
        let function = Reflect::get(&self.web_app, &JsValue::from_str(method))
            .map_err(|e| anyhow!("WebApp.{} lookup failed: {:?}", method, e))?
            .dyn_into::<Function>()
            .map_err(|_| anyhow!("WebApp.{} is not a function", method))?;
        let args: Array = args.iter().collect();
        function
            .apply(&self.web_app, &args)
            .map_err(|e| anyhow!("WebApp.{} threw: {:?}", method, e))
    }

    fn call_logged(&self, method: &str, args: &[JsValue]) {
        if let Err(e) = self.call(method, args) {
            warn!("{}", e);
        }
    }

    fn init_data_unsafe(&self, field: &str) -> Option<JsValue> {
        let unsafe_data = Reflect::get(&self.web_app, &JsValue::from_str("initDataUnsafe")).ok()?;
        defined(Reflect::get(&unsafe_data, &JsValue::from_str(field)).ok()?)
    }
}

impl HostBridge for TelegramBridge {
    fn user(&self) -> Option<BridgeUser> {
        let user = self.init_data_unsafe("user")?;
        let encoded = JSON::stringify(&user).ok()?.as_string()?;
        match serde_json::from_str(&encoded) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Unreadable user from host: {}", e);
                None
            }
        }
    }

    fn start_param(&self) -> Option<String> {
        self.init_data_unsafe("start_param")?.as_string()
    }

    fn send_data(&self, data: &str) {
        self.call_logged("sendData", &[JsValue::from_str(data)]);
    }

    fn show_popup(&self, popup: &PopupParams, on_close: Option<PopupCallback>) {
        let params = match popup_to_js(popup) {
            Ok(params) => params,
            Err(e) => {
                warn!("Popup not shown: {}", e);
                return;
            }
        };
        let mut args = vec![params];
        if let Some(callback) = on_close {
            let handler = Closure::once_into_js(move |button_id: JsValue| {
                callback(button_id.as_string().filter(|id| !id.is_empty()));
            });
            args.push(handler);
        }
        self.call_logged("showPopup", &args);
    }

    fn open_link(&self, url: &str) {
        self.call_logged("openLink", &[JsValue::from_str(url)]);
    }

    fn ready(&self) {
        self.call_logged("ready", &[]);
    }

    fn expand(&self) {
        self.call_logged("expand", &[]);
    }

    fn close(&self) {
        self.call_logged("close", &[]);
    }
}

/// Encode popup parameters as the plain object `showPopup` expects
pub fn popup_to_js(popup: &PopupParams) -> Result<JsValue> {
    let encoded = serde_json::to_string(popup)?;
    JSON::parse(&encoded).map_err(|e| anyhow!("Invalid popup JSON: {:?}", e))
}

fn defined(value: JsValue) -> Option<JsValue> {
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::Object;
    use shared::PopupButton;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_popup_to_js_builds_plain_object() {
        let popup = PopupParams {
            title: "Success".to_string(),
            message: "Income added!".to_string(),
            buttons: vec![PopupButton::ok()],
        };

        let value = popup_to_js(&popup).unwrap();

        let title = Reflect::get(&value, &JsValue::from_str("title")).unwrap();
        assert_eq!(title.as_string().as_deref(), Some("Success"));
        let buttons = Reflect::get(&value, &JsValue::from_str("buttons")).unwrap();
        assert!(Array::is_array(&buttons));
    }

    fn global_with_web_app(web_app: &Object) -> Object {
        let telegram = Object::new();
        Reflect::set(&telegram, &JsValue::from_str("WebApp"), web_app).unwrap();
        let global = Object::new();
        Reflect::set(&global, &JsValue::from_str("Telegram"), &telegram).unwrap();
        global
    }

    #[wasm_bindgen_test]
    fn test_detect_without_host_is_none() {
        assert!(TelegramBridge::detect().is_none());
    }

    #[wasm_bindgen_test]
    fn test_web_app_with_empty_init_data_is_hosted() {
        let web_app = Object::new();
        Reflect::set(&web_app, &JsValue::from_str("initData"), &JsValue::from_str("")).unwrap();
        Reflect::set(&web_app, &JsValue::from_str("sendData"), &Function::new_no_args("")).unwrap();

        let bridge = TelegramBridge::from_global(&global_with_web_app(&web_app));

        assert!(bridge.is_some());
    }

    #[wasm_bindgen_test]
    fn test_web_app_without_send_data_is_standalone() {
        let web_app = Object::new();
        Reflect::set(&web_app, &JsValue::from_str("initData"), &JsValue::from_str("query_id=1")).unwrap();

        assert!(TelegramBridge::from_global(&global_with_web_app(&web_app)).is_none());
        assert!(TelegramBridge::from_global(&Object::new().into()).is_none());
    }
}
