//! Transient toast notifications
//!
//! Owns a single `div.toast` element appended to the document body.
//! Appearance is left to the page stylesheet; this module only sets the
//! text and toggles the `on` visibility class.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// How long a message stays visible before auto-hiding (milliseconds)
const HIDE_DELAY_MS: u32 = 900;

/// Handle to the page's single toast element
///
/// Cheap to clone; all clones share the same element and hide timer.
/// Rapid calls to [`Toast::show`] overwrite the displayed message and
/// restart the timer (last-call-wins, no queueing).
#[derive(Clone)]
pub struct Toast {
    el: HtmlElement,
    /// Pending auto-hide timeout; replaced, never accumulated
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Toast {
    /// Create the toast element and attach it to the document body, hidden
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        el.set_class_name("toast");
        document
            .body()
            .ok_or_else(|| JsValue::from_str("No document body"))?
            .append_child(&el)?;
        Ok(Self {
            el,
            pending: Rc::new(RefCell::new(None)),
        })
    }

    /// Display `msg`, rescheduling the auto-hide
    ///
    /// Never fails from the caller's perspective.
    pub fn show(&self, msg: &str) {
        self.el.set_text_content(Some(msg));
        let _ = self.el.class_list().add_1("on");

        let el = self.el.clone();
        let hide = Timeout::new(HIDE_DELAY_MS, move || {
            let _ = el.class_list().remove_1("on");
        });
        if let Some(prev) = self.pending.borrow_mut().replace(hide) {
            prev.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn element(&self) -> &HtmlElement {
        &self.el
    }
}
