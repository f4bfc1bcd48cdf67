/// Viewport geometry for tracked anchors
use wasm_bindgen::JsValue;
use web_sys::{DomRect, DomRectList, Element};

/// NodeFilter.SHOW_TEXT
const SHOW_TEXT: u32 = 0x4;

/// An axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Zero-area rects are range-collapsing artifacts, not content
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn contains_x(&self, x: f64) -> bool {
        self.left <= x && self.right >= x
    }

    pub fn contains_y(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Rect {
        Rect {
            top: rect.top(),
            left: rect.left(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Compute the set of rectangles an element occupies on screen.
///
/// An element whose content stays on one line reports a single client rect
/// and that rect is the answer. When the content wraps, the element's own
/// rect list covers the whole layout box; instead, each text node is wrapped
/// in a range and the per-line rects of those ranges are collected, dropping
/// zero-area artifacts. Degenerate content falls back to the element's
/// bounding rect, so the result is never empty.
pub fn resolve_rects(element: &Element) -> Result<Vec<Rect>, JsValue> {
    let client_rects = element.get_client_rects();
    if client_rects.length() == 1 {
        return Ok(collect_rects(&client_rects, |_| true));
    }

    let document = element
        .owner_document()
        .ok_or_else(|| js_sys::Error::new("element is not attached to a document"))?;

    let range = document.create_range()?;
    let walker = document.create_tree_walker_with_what_to_show(element, SHOW_TEXT)?;

    let mut rects = Vec::new();
    while let Some(text_node) = walker.next_node()? {
        range.select_node(&text_node)?;
        if let Some(range_rects) = range.get_client_rects() {
            rects.extend(collect_rects(&range_rects, Rect::has_area));
        }
    }

    if rects.is_empty() {
        rects.push(Rect::from(&element.get_bounding_client_rect()));
    }

    Ok(rects)
}

fn collect_rects(list: &DomRectList, keep: impl Fn(&Rect) -> bool) -> Vec<Rect> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .map(|rect| Rect::from(&rect))
        .filter(keep)
        .collect()
}
