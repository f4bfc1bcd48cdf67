/// Markup contract shared by the content script and the stylesheet

/// Class on the tooltip root element (locale-independent)
pub const TOOLTIP_CLASS: &str = "link-copier-tooltip";

/// Extra class on the root when the tooltip renders below the anchor
pub const TOOLTIP_BOTTOM_CLASS: &str = "link-copier-tooltip--bottom";

/// Class on the copy button inside the tooltip
pub const TOOLTIP_BUTTON_CLASS: &str = "link-copier-tooltip__button";

/// Data attribute on the tooltip root carrying the anchor's stable id
pub const TOOLTIP_ID_ATTR: &str = "data-link-copier-tooltip-id";

/// Data attribute on a tracked anchor carrying its stable id
pub const ANCHOR_ID_ATTR: &str = "data-link-copier-anchor-id";
