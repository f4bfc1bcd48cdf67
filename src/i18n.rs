/// Localized message lookup.
///
/// The accessor functions are generated by `build.rs` from the
/// `_locales/<locale>/messages.json` catalogs; they all funnel through
/// `message()`, which delegates to the browser's catalog lookup.
use wasm_bindgen::JsValue;

use crate::chrome;

fn message(message_name: &str, substitutions: &[&str]) -> String {
    let args = js_sys::Array::new();
    for substitution in substitutions {
        args.push(&JsValue::from_str(substitution));
    }
    chrome::get_message(message_name, &args.into())
}

include!(concat!(env!("OUT_DIR"), "/i18n.rs"));
