/// DOM access helpers shared by the content-script modules
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_sys::Error::new("no window in this context").into())
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| js_sys::Error::new("no document in this context").into())
}

/// The event's target, required to be an HTML element. The host dispatching
/// anything else means a broken assumption, which surfaces as an error.
pub(crate) fn target_element(event: &MouseEvent) -> Result<HtmlElement, JsValue> {
    event
        .target()
        .ok_or_else(|| JsValue::from(js_sys::Error::new("event has no target")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| js_sys::Error::new("event target is not an HTML element").into())
}
