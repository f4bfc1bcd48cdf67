/// Single slot for the anchor currently backing a tooltip
use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlAnchorElement;

use crate::geometry::Rect;

/// Everything the handlers need about the tracked anchor
#[derive(Debug, Clone)]
pub struct ActiveTargetData {
    pub rects: Vec<Rect>,
    pub anchor_id: String,
    pub anchor: HtmlAnchorElement,
}

/// Shared handle to the one active-target slot.
///
/// The slot is non-empty exactly while a tooltip is displayed for that
/// anchor; the hover handler keeps the two in sync within each event turn.
/// Cloning the handle shares the slot, so one instance is built at startup
/// and handed to every handler that needs it.
#[derive(Clone, Default)]
pub struct ActiveTarget {
    data: Rc<RefCell<Option<ActiveTargetData>>>,
}

impl ActiveTarget {
    pub fn new() -> ActiveTarget {
        ActiveTarget::default()
    }

    pub fn get(&self) -> Option<ActiveTargetData> {
        self.data.borrow().clone()
    }

    pub fn set(&self, data: ActiveTargetData) {
        *self.data.borrow_mut() = Some(data);
    }

    pub fn clear(&self) {
        *self.data.borrow_mut() = None;
    }

    /// Same-target check by element identity, not by anchor id
    pub fn is_current(&self, anchor: &HtmlAnchorElement) -> bool {
        self.data
            .borrow()
            .as_ref()
            .is_some_and(|data| data.anchor == *anchor)
    }
}
