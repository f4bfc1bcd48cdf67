/// Pointer event handling: the hover/click state machine
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlAnchorElement, HtmlElement, MouseEvent};

use crate::active_target::{ActiveTarget, ActiveTargetData};
use crate::constants::ANCHOR_ID_ATTR;
use crate::geometry;
use crate::i18n;
use crate::position;
use crate::tooltip::Tooltip;
use crate::util;

/// One pointer event kind, one implementation
pub trait Handler {
    fn handle(&self, event: &MouseEvent) -> Result<(), JsValue>;
}

/// Copies the tracked anchor's destination when the tooltip is clicked
pub struct ClickHandler {
    active_target: ActiveTarget,
}

impl ClickHandler {
    pub fn new(active_target: ActiveTarget) -> ClickHandler {
        ClickHandler { active_target }
    }
}

impl Handler for ClickHandler {
    fn handle(&self, event: &MouseEvent) -> Result<(), JsValue> {
        let target = util::target_element(event)?;

        if !Tooltip::is_tooltip(&target) {
            // Clicks elsewhere belong to the page; ordinary navigation
            // proceeds untouched.
            return Ok(());
        }

        let data = self
            .active_target
            .get()
            .ok_or_else(|| js_sys::Error::new("tooltip is visible without an active target"))?;

        target.set_text_content(Some(&i18n::copied()));
        let clipboard = util::window()?.navigator().clipboard();
        let _ = clipboard.write_text(&data.anchor.href());

        // The tooltip and the slot stay put so the confirmation text remains
        // visible until the pointer leaves the anchor.
        Ok(())
    }
}

/// Tracks which anchor the pointer is over and keeps the tooltip in step
pub struct MouseOverHandler {
    tooltip: Tooltip,
    active_target: ActiveTarget,
}

impl MouseOverHandler {
    pub fn new(tooltip: Tooltip, active_target: ActiveTarget) -> MouseOverHandler {
        MouseOverHandler {
            tooltip,
            active_target,
        }
    }

    /// Back to idle: no tooltip, empty slot
    fn clear(&self, document: &Document) -> Result<(), JsValue> {
        self.tooltip.remove(document)?;
        self.active_target.clear();
        Ok(())
    }

    /// The nearest enclosing hyperlink, or the target itself if it is one
    fn find_closest_anchor(target: &HtmlElement) -> Result<Option<HtmlAnchorElement>, JsValue> {
        if let Some(anchor) = target.dyn_ref::<HtmlAnchorElement>() {
            return Ok(Some(anchor.clone()));
        }
        match target.closest("a")? {
            Some(element) => Ok(Some(element.dyn_into()?)),
            None => Ok(None),
        }
    }

    /// The anchor's stable id, minted and attached on first hover
    fn ensure_anchor_id(anchor: &HtmlAnchorElement) -> Result<String, JsValue> {
        if anchor.has_attribute(ANCHOR_ID_ATTR) {
            return anchor
                .get_attribute(ANCHOR_ID_ATTR)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| js_sys::Error::new("anchor id attribute is empty").into());
        }

        let anchor_id = Uuid::new_v4().to_string();
        anchor.set_attribute(ANCHOR_ID_ATTR, &anchor_id)?;
        Ok(anchor_id)
    }
}

impl Handler for MouseOverHandler {
    fn handle(&self, event: &MouseEvent) -> Result<(), JsValue> {
        let target = util::target_element(event)?;

        if Tooltip::is_tooltip(&target) {
            return Ok(());
        }

        let document = util::document()?;

        let Some(anchor) = MouseOverHandler::find_closest_anchor(&target)? else {
            return self.clear(&document);
        };

        // Moving within the tracked anchor must not recreate the tooltip
        if self.active_target.is_current(&anchor) {
            return Ok(());
        }

        let anchor_id = MouseOverHandler::ensure_anchor_id(&anchor)?;
        let rects = geometry::resolve_rects(&anchor)?;

        let placement =
            position::calculate_position(event.client_x() as f64, event.client_y() as f64, &rects);

        let Some(placement) = placement else {
            // Inside the anchor's layout box but over none of its content
            return self.clear(&document);
        };

        self.tooltip.remove(&document)?;
        let tooltip = self.tooltip.create(&document, &placement, &anchor_id)?;
        document
            .body()
            .ok_or_else(|| js_sys::Error::new("document has no body"))?
            .append_child(&tooltip)?;
        self.active_target.set(ActiveTargetData {
            rects,
            anchor_id,
            anchor,
        });

        Ok(())
    }
}
