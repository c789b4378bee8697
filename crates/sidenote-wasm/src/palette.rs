//! Command palette index wired to the page's `ninja-keys` element.
//!
//! Builds the entry list from the site manifest and assigns it to the
//! widget's `data` property, with a wasm closure attached to each entry as
//! its `handler`.

use gloo_net::http::Request;
use sidenote_core::{CommandAction, SiteManifest, build_entries};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom;

#[wasm_bindgen]
extern "C" {
    /// Page-global theme collaborator; persisting and applying the theme is
    /// the page's concern.
    #[wasm_bindgen(js_name = setThemeSetting)]
    fn set_theme_setting(mode: &str);
}

/// Handle owning the entry handler closures.
///
/// Entries live as long as the handle; [`forget`](Self::forget) leaks them
/// for the page lifetime, [`dispose`](Self::dispose) clears the widget.
#[wasm_bindgen]
pub struct CommandPalette {
    handlers: Vec<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl CommandPalette {
    /// Build the index from the inline site manifest and hand it to the
    /// palette widget.
    ///
    /// Pages without a widget or a usable manifest are left untouched.
    pub fn install() -> Result<CommandPalette, JsValue> {
        let doc = dom::document()?;

        let Some(json) = inline_manifest(&doc) else {
            log::debug!("no inline site manifest; command palette skipped");
            return Ok(Self::detached());
        };
        let manifest = match SiteManifest::from_json(&json) {
            Ok(manifest) => manifest,
            Err(err) => {
                log::warn!("invalid site manifest: {err}");
                return Ok(Self::detached());
            }
        };

        Self::from_manifest(&doc, &manifest)
    }

    /// Fetch the site manifest over HTTP, then install.
    #[wasm_bindgen(js_name = installFromUrl)]
    pub async fn install_from_url(url: String) -> Result<CommandPalette, JsValue> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let json = response
            .text()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let manifest =
            SiteManifest::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let doc = dom::document()?;
        Self::from_manifest(&doc, &manifest)
    }

    /// Number of entries handed to the widget.
    #[wasm_bindgen(getter, js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.handlers.len()
    }

    /// Clear the widget's data and drop the handlers.
    pub fn dispose(self) -> Result<(), JsValue> {
        if self.handlers.is_empty() {
            return Ok(());
        }
        let doc = dom::document()?;
        if let Some(widget) = doc.query_selector(dom::PALETTE_SELECTOR)? {
            js_sys::Reflect::set(
                widget.as_ref(),
                &JsValue::from_str("data"),
                &js_sys::Array::new(),
            )?;
        }
        Ok(())
    }

    /// Keep the handlers alive for the page lifetime.
    pub fn forget(self) {
        for handler in self.handlers {
            handler.forget();
        }
    }
}

impl CommandPalette {
    fn detached() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    fn from_manifest(doc: &Document, manifest: &SiteManifest) -> Result<Self, JsValue> {
        let Some(widget) = doc.query_selector(dom::PALETTE_SELECTOR)? else {
            log::debug!("no {} element; command palette skipped", dom::PALETTE_SELECTOR);
            return Ok(Self::detached());
        };

        let entries = build_entries(manifest);
        let data = js_sys::Array::new();
        let mut handlers = Vec::with_capacity(entries.len());

        for entry in &entries {
            let obj = serde_wasm_bindgen::to_value(entry)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let handler = action_handler(&entry.action);
            js_sys::Reflect::set(&obj, &JsValue::from_str("handler"), handler.as_ref())?;
            data.push(&obj);
            handlers.push(handler);
        }

        js_sys::Reflect::set(widget.as_ref(), &JsValue::from_str("data"), &data)?;
        log::debug!("command palette installed with {} entries", handlers.len());

        Ok(Self { handlers })
    }
}

/// Content of the inline manifest script tag, if the page embeds one.
fn inline_manifest(doc: &Document) -> Option<String> {
    doc.get_element_by_id(dom::MANIFEST_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Build the zero-argument handler the widget invokes for an entry.
fn action_handler(action: &CommandAction) -> Closure<dyn FnMut()> {
    match action {
        CommandAction::Navigate(url) => {
            let url = url.clone();
            Closure::new(move || {
                if let Ok(win) = dom::window() {
                    if let Err(err) = win.location().set_href(&url) {
                        log::warn!("navigation to {url} failed: {err:?}");
                    }
                }
            })
        }
        CommandAction::SetTheme(mode) => {
            let mode = *mode;
            Closure::new(move || set_theme_setting(mode.as_str()))
        }
    }
}
