//! Scroll-driven highlighting of the table-of-contents sidebar.
//!
//! Tracks which heading the viewport currently sits in and moves an
//! `active` class to the matching TOC link. Scroll ticks are debounced;
//! resize and the initial pass run immediately.

use std::cell::RefCell;
use std::rc::Rc;

use sidenote_core::offset::{self, SCROLL_DEBOUNCE_MS};
use sidenote_core::{Heading, select_active_heading};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Window};

use crate::dom;

/// Class toggled on the highlighted TOC link.
const ACTIVE_CLASS: &str = "active";

#[derive(Default)]
struct TocState {
    /// Pending debounce timer, if a scroll tick is queued.
    timer: Option<i32>,

    /// Cache of the last highlighted link; never consulted for correctness.
    current_active: Option<Element>,
}

/// Everything a tick needs, shared by the event closures.
struct TocContext {
    win: Window,
    headings: Vec<HtmlElement>,
    links: Vec<Element>,
    state: RefCell<TocState>,
}

impl TocContext {
    /// Recompute the active heading from scratch and move the highlight.
    fn update(&self) {
        let navbar_height = dom::published_navbar_height(&self.win);
        let scroll_y = self.win.scroll_y().unwrap_or(0.0);
        let position = offset::toc_scroll_position(scroll_y, navbar_height);

        // offsets are re-read every tick, layout may have shifted
        let headings: Vec<Heading> = self
            .headings
            .iter()
            .map(|el| Heading::new(el.id(), f64::from(el.offset_top())))
            .collect();

        if let Some(active) = select_active_heading(&headings, position) {
            self.highlight(&active.id);
        }
    }

    /// Clear every link's highlight, then mark the link for `id`.
    fn highlight(&self, id: &str) {
        let fragment = format!("#{id}");

        for link in &self.links {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
        }

        let target = self
            .links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(fragment.as_str()));
        if let Some(link) = target {
            let _ = link.class_list().add_1(ACTIVE_CLASS);
            self.state.borrow_mut().current_active = Some(link.clone());
        }
    }

    /// Re-arm the trailing debounce timer for a scroll tick.
    fn schedule(&self, tick: &js_sys::Function) {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = state.timer.take() {
            self.win.clear_timeout_with_handle(handle);
        }
        state.timer = self
            .win
            .set_timeout_with_callback_and_timeout_and_arguments_0(tick, SCROLL_DEBOUNCE_MS)
            .ok();
    }
}

struct Hooks {
    ctx: Rc<TocContext>,
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
}

/// Handle owning the highlighter listeners.
///
/// Pages without TOC links or headings get a disabled handle that never
/// attached anything.
#[wasm_bindgen]
pub struct TocHighlighter {
    hooks: Option<Hooks>,
}

#[wasm_bindgen]
impl TocHighlighter {
    /// Wire up scroll/resize tracking and run the initial highlight pass.
    pub fn install() -> Result<TocHighlighter, JsValue> {
        let win = dom::window()?;
        let doc = dom::document()?;

        let links = dom::collect_elements(&doc, dom::TOC_LINK_SELECTOR)?;
        let headings: Vec<HtmlElement> = dom::collect_elements(&doc, dom::HEADING_SELECTOR)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        if links.is_empty() || headings.is_empty() {
            log::debug!("no TOC links or headings; highlighter disabled");
            return Ok(Self { hooks: None });
        }

        let ctx = Rc::new(TocContext {
            win: win.clone(),
            headings,
            links,
            state: RefCell::new(TocState::default()),
        });

        let tick = Rc::new(Closure::<dyn FnMut()>::new({
            let ctx = Rc::clone(&ctx);
            move || {
                ctx.state.borrow_mut().timer = None;
                ctx.update();
            }
        }));

        let scroll = Closure::<dyn FnMut()>::new({
            let ctx = Rc::clone(&ctx);
            let tick = Rc::clone(&tick);
            move || ctx.schedule((*tick).as_ref().unchecked_ref())
        });

        let resize = Closure::<dyn FnMut()>::new({
            let ctx = Rc::clone(&ctx);
            move || ctx.update()
        });

        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        win.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            scroll.as_ref().unchecked_ref(),
            &passive,
        )?;
        win.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            resize.as_ref().unchecked_ref(),
            &passive,
        )?;

        ctx.update();

        Ok(Self {
            hooks: Some(Hooks { ctx, scroll, resize }),
        })
    }

    /// Whether the highlighter found TOC links and headings to track.
    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        self.hooks.is_some()
    }

    /// Id of the currently highlighted heading, if any.
    #[wasm_bindgen(getter, js_name = activeId)]
    pub fn active_id(&self) -> Option<String> {
        let hooks = self.hooks.as_ref()?;
        let state = hooks.ctx.state.borrow();
        state
            .current_active
            .as_ref()
            .and_then(|link| link.get_attribute("href"))
            .map(|href| href.trim_start_matches('#').to_string())
    }

    /// Remove the listeners and cancel any pending tick.
    pub fn dispose(self) -> Result<(), JsValue> {
        let Some(hooks) = self.hooks else {
            return Ok(());
        };
        let win = &hooks.ctx.win;
        win.remove_event_listener_with_callback("scroll", hooks.scroll.as_ref().unchecked_ref())?;
        win.remove_event_listener_with_callback("resize", hooks.resize.as_ref().unchecked_ref())?;
        if let Some(handle) = hooks.ctx.state.borrow_mut().timer.take() {
            win.clear_timeout_with_handle(handle);
        }
        Ok(())
    }

    /// Keep the listeners alive for the page lifetime.
    pub fn forget(self) {
        let Some(hooks) = self.hooks else {
            return;
        };
        // the scroll closure keeps the debounce tick alive through its Rc
        hooks.scroll.forget();
        hooks.resize.forget();
    }
}
