//! Browser Bindings
//!
//! `window.localStorage` and `window.alert` behind the controller traits.

use crate::controller::Notifier;
use crate::storage::KeyValueStore;

/// `window.localStorage`, looked up per call. Unavailable storage reads
/// as empty and drops writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, '{}' not saved", key);
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("Failed to write '{}' to localStorage: {:?}", key, err);
        }
    }
}

/// `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, alert not shown: {}", message);
            return;
        };
        report_alert(window.alert_with_message(message));
    }
}

/// Log a failed `alert` call; returns whether it was shown
fn report_alert<E: std::fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Failed to show alert: {:?}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_alert() {
        assert!(report_alert::<&str>(Ok(())));
        assert!(!report_alert(Err("alerts blocked by the page")));
    }
}
