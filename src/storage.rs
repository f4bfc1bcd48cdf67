/// Typed wrapper over the persisted `enabled` flag in `chrome.storage.local`
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::chrome;

/// The flag defaults on until the user flips it off
const DEFAULT_ENABLED: bool = true;

/// Change notifications from other storage areas are ignored
const LOCAL_NAMESPACE: &str = "local";

/// The slice of `chrome.storage.local` this extension owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFlags {
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Shape of one entry in a storage change event
#[derive(Debug, Clone, Deserialize)]
pub struct FlagChange {
    #[serde(default, rename = "newValue")]
    pub new_value: Option<bool>,
}

/// Shape of a storage change event; keys other extensions or modules write
/// show up here too, so everything is optional
#[derive(Debug, Clone, Deserialize)]
pub struct FlagChanges {
    #[serde(default)]
    pub enabled: Option<FlagChange>,
}

pub struct EnabledFlag;

impl EnabledFlag {
    /// Current persisted value; an absent key reads as enabled
    pub async fn read() -> Result<bool, String> {
        let items = chrome::storage_local_get()
            .await
            .map_err(|e| format!("Failed to read storage: {:?}", e))?;

        if items.is_null() || items.is_undefined() {
            return Ok(DEFAULT_ENABLED);
        }

        let flags: StoredFlags = serde_wasm_bindgen::from_value(items)
            .map_err(|e| format!("Failed to parse storage: {}", e))?;
        Ok(flags.enabled.unwrap_or(DEFAULT_ENABLED))
    }

    pub async fn write(enabled: bool) -> Result<(), String> {
        let items = serde_wasm_bindgen::to_value(&StoredFlags {
            enabled: Some(enabled),
        })
        .map_err(|e| format!("Failed to serialize storage: {}", e))?;

        chrome::storage_local_set(&items)
            .await
            .map_err(|e| format!("Failed to write storage: {:?}", e))
    }

    /// Invoke `on_change` for every future flag change in the local area.
    /// The listener lives as long as the script context.
    pub fn subscribe(on_change: impl Fn(bool) + 'static) {
        let listener = Closure::wrap(Box::new(move |changes: JsValue, namespace: JsValue| {
            if namespace.as_string().as_deref() != Some(LOCAL_NAMESPACE) {
                return;
            }
            let changes: FlagChanges = match serde_wasm_bindgen::from_value(changes) {
                Ok(changes) => changes,
                Err(e) => {
                    log::error!("Unreadable storage change event: {}", e);
                    return;
                }
            };
            if let Some(change) = changes.enabled {
                // A deleted key means "flag absent", which reads as enabled
                on_change(change.new_value.unwrap_or(DEFAULT_ENABLED));
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        chrome::storage_on_changed_add_listener(listener.as_ref().unchecked_ref());
        listener.forget();
    }

    /// Drive `on_change` from the flag: once with the current persisted
    /// value, then on every change notification
    pub fn watch(on_change: impl Fn(bool) + 'static) {
        let on_change = Rc::new(on_change);

        {
            let on_change = Rc::clone(&on_change);
            spawn_local(async move {
                match EnabledFlag::read().await {
                    Ok(enabled) => on_change(enabled),
                    Err(e) => log::error!("{}", e),
                }
            });
        }

        EnabledFlag::subscribe(move |enabled| on_change(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_flags_absent_key() {
        let flags: StoredFlags = serde_json::from_str("{}").unwrap();

        assert_eq!(flags.enabled, None);
        assert!(flags.enabled.unwrap_or(DEFAULT_ENABLED));
    }

    #[test]
    fn test_stored_flags_explicit_values() {
        let off: StoredFlags = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        let on: StoredFlags = serde_json::from_str(r#"{"enabled": true}"#).unwrap();

        assert_eq!(off.enabled, Some(false));
        assert_eq!(on.enabled, Some(true));
    }

    #[test]
    fn test_stored_flags_ignores_foreign_keys() {
        let flags: StoredFlags =
            serde_json::from_str(r#"{"enabled": false, "someOtherKey": [1, 2]}"#).unwrap();

        assert_eq!(flags.enabled, Some(false));
    }

    #[test]
    fn test_flag_changes_full_event() {
        let changes: FlagChanges =
            serde_json::from_str(r#"{"enabled": {"newValue": false, "oldValue": true}}"#).unwrap();

        let change = changes.enabled.unwrap();
        assert_eq!(change.new_value, Some(false));
    }

    #[test]
    fn test_flag_changes_other_key_only() {
        let changes: FlagChanges =
            serde_json::from_str(r#"{"someOtherKey": {"newValue": 3}}"#).unwrap();

        assert!(changes.enabled.is_none());
    }

    #[test]
    fn test_flag_changes_deleted_key_defaults_on() {
        // Removing the key fires a change with no newValue
        let changes: FlagChanges =
            serde_json::from_str(r#"{"enabled": {"oldValue": false}}"#).unwrap();

        let change = changes.enabled.unwrap();
        assert_eq!(change.new_value, None);
        assert!(change.new_value.unwrap_or(DEFAULT_ENABLED));
    }

    #[test]
    fn test_stored_flags_round_trip() {
        let flags = StoredFlags {
            enabled: Some(false),
        };

        let json = serde_json::to_string(&flags).unwrap();
        let parsed: StoredFlags = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.enabled, Some(false));
    }
}
