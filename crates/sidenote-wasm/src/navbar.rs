//! Navbar height publishing and smooth anchor scrolling.
//!
//! Publishes the navbar's rendered height as the `--navbar-height` CSS
//! custom property and intercepts same-page anchor clicks to scroll the
//! target below the navbar.

use sidenote_core::offset::{self, DEFAULT_NAVBAR_HEIGHT, NAVBAR_HEIGHT_VAR};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, ScrollBehavior,
    ScrollToOptions,
};

use crate::dom;

/// Anchors pointing at a fragment on the current page.
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Handle owning the navbar listeners.
///
/// Call [`dispose`](Self::dispose) to unhook the page, or
/// [`forget`](Self::forget) to keep the listeners for the page lifetime.
#[wasm_bindgen]
pub struct NavbarOffset {
    resize: Closure<dyn FnMut()>,
    click: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl NavbarOffset {
    /// Publish the navbar height and wire up resize/click listeners.
    pub fn install() -> Result<NavbarOffset, JsValue> {
        let win = dom::window()?;
        let doc = dom::document()?;

        publish_height(&doc);

        let resize = Closure::<dyn FnMut()>::new({
            let doc = doc.clone();
            move || publish_height(&doc)
        });
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        win.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            resize.as_ref().unchecked_ref(),
            &passive,
        )?;

        // not passive: resolvable fragments prevent default navigation
        let click = Closure::<dyn FnMut(Event)>::new({
            let doc = doc.clone();
            move |event: Event| on_click(&doc, &event)
        });
        doc.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;

        Ok(Self { resize, click })
    }

    /// Remove both listeners.
    pub fn dispose(self) -> Result<(), JsValue> {
        let win = dom::window()?;
        let doc = dom::document()?;
        win.remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())?;
        doc.remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref())?;
        Ok(())
    }

    /// Keep the listeners alive for the page lifetime.
    pub fn forget(self) {
        self.resize.forget();
        self.click.forget();
    }
}

fn navbar_element(doc: &Document) -> Option<HtmlElement> {
    doc.query_selector(dom::NAVBAR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Measure the navbar and write `--navbar-height` on the document root.
///
/// An absent element or an unrendered (zero-height) navbar publishes the
/// 60px default; the write is idempotent and last-write-wins.
fn publish_height(doc: &Document) {
    let height = navbar_element(doc)
        .map(|el| f64::from(el.offset_height()))
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT);

    let root = doc
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        if let Err(err) = root
            .style()
            .set_property(NAVBAR_HEIGHT_VAR, &offset::format_px(height))
        {
            log::warn!("failed to publish {NAVBAR_HEIGHT_VAR}: {err:?}");
        }
    }
}

/// Intercept same-page anchor clicks and scroll with the navbar offset.
///
/// Default navigation is prevented only when the fragment resolves to an
/// element; a dead fragment falls through to the browser untouched.
fn on_click(doc: &Document, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(anchor)) = target.closest(ANCHOR_SELECTOR) else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(fragment) = href.strip_prefix('#') else {
        return;
    };
    if fragment.is_empty() {
        return;
    }
    let Some(section) = doc.get_element_by_id(fragment) else {
        return;
    };

    event.prevent_default();

    let Ok(win) = dom::window() else {
        return;
    };
    let navbar_height = navbar_element(doc)
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT);
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let top = offset::anchor_scroll_top(
        section.get_bounding_client_rect().top(),
        scroll_y,
        navbar_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}
