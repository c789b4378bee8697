//! Sidenote Browser Runtime
//!
//! Page enhancements for a static blog, compiled to WebAssembly.
//!
//! # Components
//!
//! - [`CommandPalette`] - feeds the `ninja-keys` widget its command entries
//! - [`NavbarOffset`] - publishes `--navbar-height` and smooth-scrolls
//!   same-page anchors below the navbar
//! - [`TocHighlighter`] - highlights the TOC link for the section in view
//!
//! Components are independent; they share only the page's DOM and the
//! `--navbar-height` CSS variable.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { mount } from 'sidenote-wasm';
//!
//! await init();
//! mount();  // wires all three components for the page lifetime
//! ```

mod dom;
pub mod navbar;
pub mod palette;
pub mod toc;

pub use navbar::NavbarOffset;
pub use palette::CommandPalette;
pub use toc::TocHighlighter;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up the panic hook and the console logger.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wire all three components for the page lifetime.
///
/// Components that find nothing to attach to skip themselves; the palette
/// reads the inline site manifest.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    NavbarOffset::install()?.forget();
    TocHighlighter::install()?.forget();
    CommandPalette::install()?.forget();
    Ok(())
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the runtime is ready.
#[wasm_bindgen(js_name = isReady)]
pub fn is_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_is_ready() {
        assert!(is_ready());
    }
}
