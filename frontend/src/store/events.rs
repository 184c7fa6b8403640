//! Notification channel for cache changes.
//!
//! Two signals cover all listeners: custom events dispatched on `window`
//! reach components in the tab that performed the write, and the browser's
//! native `storage` event reaches every other tab of the same origin.
//! Header and navbar subscribe to both and re-read the cache on either.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use yew::Callback;

pub const AUTH_USER_UPDATED: &str = "auth-user-updated";
pub const AUTH_USER_REMOVED: &str = "auth-user-removed";
pub const LOGO_UPDATED: &str = "logo-updated";
pub const COMPANY_NAME_UPDATED: &str = "company-name-updated";

/// Outbound half of the channel; faked in tests to record emissions.
pub trait EventBus {
    fn emit(&self, name: &str);
}

/// Dispatches plain events on `window`.
#[derive(Clone, Copy, Default)]
pub struct BrowserEventBus;

impl EventBus for BrowserEventBus {
    fn emit(&self, name: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(event) = web_sys::Event::new(name) {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}

/// Subscribes to one same-tab cache event. The subscription lasts as long
/// as the returned listener is held.
pub fn subscribe(name: &'static str, callback: Callback<()>) -> EventListener {
    let window = web_sys::window().unwrap();
    EventListener::new(&window, name, move |_| callback.emit(()))
}

/// Subscribes to the native cross-tab `storage` event, filtered to the
/// given keys. The callback receives the changed key.
pub fn subscribe_storage(keys: &'static [&'static str], callback: Callback<String>) -> EventListener {
    let window = web_sys::window().unwrap();
    EventListener::new(&window, "storage", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() {
            if let Some(key) = event.key() {
                if keys.contains(&key.as_str()) {
                    callback.emit(key);
                }
            }
        }
    })
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::EventBus;

    /// Records every emitted event name.
    #[derive(Clone, Default)]
    pub struct RecordingBus {
        pub emitted: Rc<RefCell<Vec<String>>>,
    }

    impl EventBus for RecordingBus {
        fn emit(&self, name: &str) {
            self.emitted.borrow_mut().push(name.to_string());
        }
    }
}
