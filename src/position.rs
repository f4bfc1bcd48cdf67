/// Tooltip placement relative to the pointer and the anchor's rects
use crate::geometry::Rect;

/// Tooltips this close to the viewport's top edge render below the anchor
const TOP_EDGE_THRESHOLD: f64 = 40.0;

/// Where the tooltip goes for one hover event. Computed fresh per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    /// Vertical distance from the chosen rect's top to the pointer; the
    /// candidate with the smallest absolute gap wins
    pub mouse_top_gap: f64,
}

impl TooltipPlacement {
    fn new(rect: &Rect, client_x: f64, client_y: f64) -> TooltipPlacement {
        TooltipPlacement {
            top: rect.top,
            left: client_x,
            bottom: rect.bottom,
            mouse_top_gap: rect.top - client_y,
        }
    }

    /// True when the anchor sits too close to the top edge to fit a tooltip
    /// above it
    pub fn renders_below(&self) -> bool {
        self.top < TOP_EDGE_THRESHOLD
    }

    /// The `top` CSS coordinate the tooltip root ends up with
    pub fn rendered_top(&self) -> f64 {
        if self.renders_below() { self.bottom } else { self.top }
    }
}

/// Pick the anchor rect the pointer is actually over and place the tooltip
/// against it.
///
/// With a single rect containing the pointer on both axes the answer is
/// immediate. Otherwise every rect spanning the pointer's X is a candidate
/// and the one vertically closest to the pointer wins; this covers wrapped
/// anchors (several line boxes) and zero-height anchors, where the pointer
/// is horizontally but never vertically inside a box. `None` means the
/// pointer is inside the element's layout box but over none of its content.
pub fn calculate_position(client_x: f64, client_y: f64, rects: &[Rect]) -> Option<TooltipPlacement> {
    if let [rect] = rects {
        if rect.contains_x(client_x) && rect.contains_y(client_y) {
            return Some(TooltipPlacement::new(rect, client_x, client_y));
        }
    }

    rects
        .iter()
        .filter(|rect| rect.contains_x(client_x))
        .map(|rect| TooltipPlacement::new(rect, client_x, client_y))
        .min_by(|a, b| a.mouse_top_gap.abs().total_cmp(&b.mouse_top_gap.abs()))
}
