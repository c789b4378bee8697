//! Shared DOM accessors and page selectors.

use sidenote_core::{NAVBAR_HEIGHT_VAR, parse_px};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

/// Selector for the fixed site navbar.
pub(crate) const NAVBAR_SELECTOR: &str = ".main-navbar";

/// Selector matching TOC links in the sidebar.
pub(crate) const TOC_LINK_SELECTOR: &str = "aside nav a";

/// Selector matching headings that participate in TOC highlighting.
pub(crate) const HEADING_SELECTOR: &str = "h1[id], h2[id], h3[id], h4[id], h5[id], h6[id]";

/// Element id of the inline site manifest script tag.
pub(crate) const MANIFEST_ELEMENT_ID: &str = "site-manifest";

/// Tag name of the command palette custom element.
pub(crate) const PALETTE_SELECTOR: &str = "ninja-keys";

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Collect all elements matching a selector, in document order.
pub(crate) fn collect_elements(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(el);
        }
    }
    Ok(elements)
}

/// Read the published navbar height from the root's computed style.
///
/// Falls back to the 60px default when the variable is unset or malformed.
pub(crate) fn published_navbar_height(win: &Window) -> f64 {
    let value = win
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| win.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value(NAVBAR_HEIGHT_VAR).ok())
        .unwrap_or_default();
    parse_px(&value)
}
