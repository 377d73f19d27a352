//! Clipboard utilities for copying text
//!
//! Prefers the async Web Clipboard API (secure contexts only) and falls
//! back to selecting the text inside a hidden `<textarea>` and running the
//! legacy `execCommand("copy")`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

/// Copy text to the system clipboard
///
/// Returns `Ok(true)` when the clipboard write went through, `Ok(false)`
/// when the legacy fallback command reported failure. A rejected Clipboard
/// API write surfaces as `Err` rather than being swallowed.
pub async fn copy_text(text: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let clipboard = window.navigator().clipboard();

    let clipboard_js: &JsValue = clipboard.as_ref();
    if window.is_secure_context() && !clipboard_js.is_undefined() {
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
        return Ok(true);
    }

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    copy_via_selection(&document, text)
}

/// Legacy copy: select the text in an off-screen textarea and ask the
/// browser to copy the selection
///
/// The temporary node is removed on every path, including when the command
/// throws (reported as `Ok(false)`).
fn copy_via_selection(document: &Document, text: &str) -> Result<bool, JsValue> {
    let ta: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    ta.set_value(text);
    let style = ta.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "-1000px")?;
    style.set_property("left", "-1000px")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    body.append_child(&ta)?;
    let _ = ta.focus();
    ta.select();

    let ok = document
        .unchecked_ref::<HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    let _ = body.remove_child(&ta);
    Ok(ok)
}
