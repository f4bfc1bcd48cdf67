//! Browser-side tests for the DOM-coupled pieces: geometry resolution,
//! tooltip markup, the active-target slot, and listener lifecycle.
//!
//! Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, MouseEvent, MouseEventInit};

use link_copier::active_target::{ActiveTarget, ActiveTargetData};
use link_copier::constants::{ANCHOR_ID_ATTR, TOOLTIP_BOTTOM_CLASS, TOOLTIP_CLASS, TOOLTIP_ID_ATTR};
use link_copier::geometry::{self, Rect};
use link_copier::handler::{Handler, MouseOverHandler};
use link_copier::listeners::EventListeners;
use link_copier::position::TooltipPlacement;
use link_copier::tooltip::{Tooltip, TooltipChild};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// A tooltip child without localized text, since the message catalog is only
/// reachable inside a real extension context
struct PlainChild;

impl TooltipChild for PlainChild {
    fn create(&self, document: &Document) -> Result<HtmlElement, JsValue> {
        let button: HtmlElement = document.create_element("button")?.dyn_into()?;
        button.set_text_content(Some("copy"));
        Ok(button)
    }
}

fn test_tooltip() -> Tooltip {
    Tooltip::new(Box::new(PlainChild))
}

fn mount(html: &str) -> Element {
    let container = document().create_element("div").unwrap();
    container.set_inner_html(html);
    body().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn resolve_rects_single_line_anchor() {
    let container = mount(r#"<a href="https://example.com/">one line</a>"#);
    let anchor = container.query_selector("a").unwrap().unwrap();

    let rects = geometry::resolve_rects(&anchor).unwrap();

    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0], Rect::from(&anchor.get_bounding_client_rect()));
    container.remove();
}

#[wasm_bindgen_test]
fn resolve_rects_wrapped_anchor() {
    let container = mount(
        r#"<div style="width: 60px;"><a href="https://example.com/">a hyperlink with enough words to wrap onto several lines</a></div>"#,
    );
    let anchor = container.query_selector("a").unwrap().unwrap();

    let rects = geometry::resolve_rects(&anchor).unwrap();

    assert!(rects.len() > 1);
    for rect in &rects {
        assert!(rect.has_area());
    }
    container.remove();
}

#[wasm_bindgen_test]
fn tooltip_markup_above_placement() {
    let placement = TooltipPlacement {
        top: 100.0,
        left: 50.0,
        bottom: 120.0,
        mouse_top_gap: -5.0,
    };

    let tooltip = test_tooltip()
        .create(&document(), &placement, "anchor-1")
        .unwrap();

    assert!(tooltip.class_list().contains(TOOLTIP_CLASS));
    assert!(!tooltip.class_list().contains(TOOLTIP_BOTTOM_CLASS));
    assert_eq!(tooltip.get_attribute(TOOLTIP_ID_ATTR).unwrap(), "anchor-1");
    assert_eq!(tooltip.style().get_property_value("top").unwrap(), "100px");
    assert_eq!(tooltip.style().get_property_value("left").unwrap(), "50px");
    assert_eq!(tooltip.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn tooltip_markup_near_top_edge_renders_below() {
    let placement = TooltipPlacement {
        top: 10.0,
        left: 50.0,
        bottom: 30.0,
        mouse_top_gap: -5.0,
    };

    let tooltip = test_tooltip()
        .create(&document(), &placement, "anchor-2")
        .unwrap();

    assert!(tooltip.class_list().contains(TOOLTIP_BOTTOM_CLASS));
    assert_eq!(tooltip.style().get_property_value("top").unwrap(), "30px");
}

#[wasm_bindgen_test]
fn tooltip_detection_and_removal() {
    let placement = TooltipPlacement {
        top: 100.0,
        left: 50.0,
        bottom: 120.0,
        mouse_top_gap: 0.0,
    };
    let tooltip = test_tooltip();
    let root = tooltip.create(&document(), &placement, "anchor-3").unwrap();
    body().append_child(&root).unwrap();

    let button = root.first_element_child().unwrap();
    assert!(Tooltip::is_tooltip(&root));
    assert!(Tooltip::is_tooltip(&button));
    assert!(!Tooltip::is_tooltip(&body()));

    tooltip.remove(&document()).unwrap();
    assert!(
        document()
            .query_selector(&format!(".{}", TOOLTIP_CLASS))
            .unwrap()
            .is_none()
    );
}

fn anchor_element() -> HtmlAnchorElement {
    document().create_element("a").unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn active_target_identity_check() {
    let slot = ActiveTarget::new();
    let first = anchor_element();
    let second = anchor_element();

    assert!(slot.get().is_none());
    assert!(!slot.is_current(&first));

    slot.set(ActiveTargetData {
        rects: vec![],
        anchor_id: "anchor-4".to_string(),
        anchor: first.clone(),
    });

    assert!(slot.is_current(&first));
    assert!(!slot.is_current(&second));
    assert_eq!(slot.get().unwrap().anchor_id, "anchor-4");

    slot.clear();
    assert!(slot.get().is_none());
    assert!(!slot.is_current(&first));
}

struct CountingHandler {
    count: Rc<Cell<usize>>,
}

impl Handler for CountingHandler {
    fn handle(&self, _event: &MouseEvent) -> Result<(), JsValue> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

fn dispatch(event_type: &str) {
    let event = MouseEvent::new(event_type).unwrap();
    document().dispatch_event(&event).unwrap();
}

fn dispatch_mouseover_at(target: &HtmlElement, client_x: i32, client_y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mouseover", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn current_tooltip() -> Option<Element> {
    document()
        .query_selector(&format!(".{}", TOOLTIP_CLASS))
        .unwrap()
}

#[wasm_bindgen_test]
fn hovering_same_anchor_keeps_tooltip() {
    let container = mount(r#"<a href="https://example.com/x">hover me</a>"#);
    let anchor: HtmlElement = container
        .query_selector("a")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let rect = anchor.get_bounding_client_rect();
    let x = ((rect.left() + rect.right()) / 2.0) as i32;
    let y = ((rect.top() + rect.bottom()) / 2.0) as i32;

    let slot = ActiveTarget::new();
    let hover = MouseOverHandler::new(Tooltip::new(Box::new(PlainChild)), slot.clone());
    let clicks = Rc::new(Cell::new(0));
    let mut listeners = EventListeners::new(
        Rc::new(hover),
        Rc::new(CountingHandler {
            count: Rc::clone(&clicks),
        }),
    );
    listeners.enable(true).unwrap();

    dispatch_mouseover_at(&anchor, x, y);
    let first = current_tooltip().unwrap();
    let anchor_id = anchor.get_attribute(ANCHOR_ID_ATTR).unwrap();
    assert!(!anchor_id.is_empty());
    assert_eq!(first.get_attribute(TOOLTIP_ID_ATTR).unwrap(), anchor_id);

    // Hovering the tracked anchor again must not recreate the tooltip
    dispatch_mouseover_at(&anchor, x + 1, y);
    let second = current_tooltip().unwrap();
    assert_eq!(first, second);
    assert_eq!(anchor.get_attribute(ANCHOR_ID_ATTR).unwrap(), anchor_id);

    // Leaving every anchor removes the tooltip and empties the slot
    dispatch_mouseover_at(&body(), 0, 0);
    assert!(current_tooltip().is_none());
    assert!(slot.get().is_none());

    listeners.enable(false).unwrap();
    container.remove();
}

#[wasm_bindgen_test]
fn listener_lifecycle_round_trip() {
    let mouseovers = Rc::new(Cell::new(0));
    let clicks = Rc::new(Cell::new(0));
    let mut listeners = EventListeners::new(
        Rc::new(CountingHandler {
            count: Rc::clone(&mouseovers),
        }),
        Rc::new(CountingHandler {
            count: Rc::clone(&clicks),
        }),
    );

    assert!(!listeners.is_attached());

    // A second enable must not register a second listener pair
    listeners.enable(true).unwrap();
    listeners.enable(true).unwrap();
    assert!(listeners.is_attached());

    dispatch("mouseover");
    assert_eq!(mouseovers.get(), 1);
    assert_eq!(clicks.get(), 0);

    dispatch("click");
    assert_eq!(clicks.get(), 1);

    // Disabling revokes both listeners in one action
    listeners.enable(false).unwrap();
    assert!(!listeners.is_attached());
    dispatch("mouseover");
    dispatch("click");
    assert_eq!(mouseovers.get(), 1);
    assert_eq!(clicks.get(), 1);

    // And the cycle restarts cleanly
    listeners.enable(true).unwrap();
    dispatch("mouseover");
    assert_eq!(mouseovers.get(), 2);
    listeners.enable(false).unwrap();
}
