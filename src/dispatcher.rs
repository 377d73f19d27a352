//! Delegated click handling for copy buttons
//!
//! One listener on the document matches clicks against `button.copy`
//! (ancestor-inclusive, so dynamically added buttons work too), runs the
//! clipboard write as a fire-and-forget task, and reports the outcome
//! through the shared [`Toast`].

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::clipboard;
use crate::toast::Toast;

/// Elements that trigger a copy on click
const COPY_SELECTOR: &str = "button.copy";
/// Attribute holding the text to copy
const COPY_ATTR: &str = "data-copy";

const COPIED_MSG: &str = "copied";
const FAILED_MSG: &str = "copy failed (skill issue)";

/// Install the page-wide click listener
///
/// The listener is leaked and stays active for the lifetime of the page.
/// Overlapping copies run as independent tasks; whichever resolves last
/// owns the toast.
pub fn install(document: &Document, toast: Toast) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(text) = copy_payload(&event) else {
            return;
        };
        let toast = toast.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match clipboard::copy_text(&text).await {
                Ok(true) => toast.show(COPIED_MSG),
                Ok(false) => {
                    log::warn!("Legacy copy command reported failure");
                    toast.show(FAILED_MSG);
                }
                Err(e) => {
                    log::warn!("Clipboard write rejected: {:?}", e);
                    toast.show(FAILED_MSG);
                }
            }
        });
    });
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Extract the text to copy from a click, if it hit a copy button
///
/// A missing or empty `data-copy` attribute is a silent no-op.
fn copy_payload(event: &Event) -> Option<String> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest(COPY_SELECTOR).ok()??;
    let text = button.get_attribute(COPY_ATTR)?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
