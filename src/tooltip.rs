/// The overlay element rendered next to a hovered anchor
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{TOOLTIP_BOTTOM_CLASS, TOOLTIP_BUTTON_CLASS, TOOLTIP_CLASS, TOOLTIP_ID_ATTR};
use crate::i18n;
use crate::position::TooltipPlacement;

/// Builds the interactive content inside the tooltip root
pub trait TooltipChild {
    fn create(&self, document: &Document) -> Result<HtmlElement, JsValue>;
}

/// The copy button, the one child this extension ships
#[derive(Default)]
pub struct TooltipButton;

impl TooltipChild for TooltipButton {
    fn create(&self, document: &Document) -> Result<HtmlElement, JsValue> {
        let button: HtmlElement = document.create_element("button")?.dyn_into()?;
        button.class_list().add_1(TOOLTIP_BUTTON_CLASS)?;
        button.set_text_content(Some(&i18n::copy_link()));
        Ok(button)
    }
}

pub struct Tooltip {
    child: Box<dyn TooltipChild>,
}

impl Default for Tooltip {
    fn default() -> Tooltip {
        Tooltip::new(Box::new(TooltipButton))
    }
}

impl Tooltip {
    pub fn new(child: Box<dyn TooltipChild>) -> Tooltip {
        Tooltip { child }
    }

    /// Whether an event target is the tooltip root or anything inside it
    pub fn is_tooltip(target: &Element) -> bool {
        target.class_list().contains(TOOLTIP_CLASS)
            || matches!(target.closest(&format!(".{}", TOOLTIP_CLASS)), Ok(Some(_)))
    }

    /// Build the tooltip root at the computed placement, tagged with the
    /// anchor's stable id. The caller inserts it into the document.
    pub fn create(
        &self,
        document: &Document,
        placement: &TooltipPlacement,
        anchor_id: &str,
    ) -> Result<HtmlElement, JsValue> {
        let tooltip: HtmlElement = document.create_element("div")?.dyn_into()?;
        tooltip.set_attribute(TOOLTIP_ID_ATTR, anchor_id)?;
        tooltip.class_list().add_1(TOOLTIP_CLASS)?;

        if placement.renders_below() {
            tooltip.class_list().add_1(TOOLTIP_BOTTOM_CLASS)?;
        }
        let style = tooltip.style();
        style.set_property("top", &format!("{}px", placement.rendered_top()))?;
        style.set_property("left", &format!("{}px", placement.left))?;

        let child = self.child.create(document)?;
        tooltip.append_child(&child)?;
        Ok(tooltip)
    }

    /// Remove the currently displayed tooltip, if any
    pub fn remove(&self, document: &Document) -> Result<(), JsValue> {
        if let Some(tooltip) = document.query_selector(&format!(".{}", TOOLTIP_CLASS))? {
            tooltip.remove();
        }
        Ok(())
    }
}
