//! Pixel arithmetic shared by the navbar writer and the TOC highlighter.

/// Navbar height used when the element is absent or unmeasured.
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 60.0;

/// Gap kept between the navbar and a scrolled-to anchor target.
pub const ANCHOR_SCROLL_MARGIN: f64 = 20.0;

/// Extra offset when deciding which heading the viewport sits in.
pub const TOC_SCROLL_MARGIN: f64 = 80.0;

/// Trailing debounce applied to scroll ticks, in milliseconds.
pub const SCROLL_DEBOUNCE_MS: i32 = 10;

/// Name of the CSS custom property carrying the published navbar height.
pub const NAVBAR_HEIGHT_VAR: &str = "--navbar-height";

/// Format a pixel count as the CSS value written to `--navbar-height`.
pub fn format_px(value: f64) -> String {
    format!("{}px", value.round() as i64)
}

/// Parse a CSS pixel string, falling back to the default navbar height.
///
/// Accepts `"64px"` or a bare `"64"`; empty, negative, or malformed input
/// yields the 60px default.
pub fn parse_px(value: &str) -> f64 {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();

    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT)
}

/// Effective document position compared against heading offsets.
pub fn toc_scroll_position(scroll_y: f64, navbar_height: f64) -> f64 {
    scroll_y + navbar_height + TOC_SCROLL_MARGIN
}

/// Document offset a smooth-scrolled anchor target is aligned to.
///
/// `target_top` is the target's viewport-relative top; the result leaves the
/// target `navbar_height + 20` px below the viewport top.
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    target_top + scroll_y - (navbar_height + ANCHOR_SCROLL_MARGIN)
}
