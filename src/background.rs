/// Service worker: keeps the action icon in step with the enabled flag
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::chrome;
use crate::storage::EnabledFlag;

const ENABLED_ICON: &str = "icon128.png";
const DISABLED_ICON: &str = "icon128.disabled.png";

#[derive(Serialize)]
struct IconDetails {
    path: &'static str,
}

pub fn run() {
    EnabledFlag::watch(|enabled| {
        spawn_local(async move {
            let path = if enabled { ENABLED_ICON } else { DISABLED_ICON };
            let details = match serde_wasm_bindgen::to_value(&IconDetails { path }) {
                Ok(details) => details,
                Err(e) => {
                    log::error!("Failed to serialize icon details: {}", e);
                    return;
                }
            };
            if let Err(e) = chrome::action_set_icon(&details).await {
                log::error!("Failed to set action icon: {:?}", e);
            }
        });
    });
}
