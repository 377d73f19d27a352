//! Click-to-copy support for static pages
//!
//! Compiled to WebAssembly and loaded once per page. Any `button.copy`
//! carrying a `data-copy` attribute gets copy-on-click behavior, with a
//! toast reporting success or failure. Buttons added after load work too,
//! since a single delegated listener on the document does the matching.

use wasm_bindgen::prelude::*;

mod clipboard;
mod dispatcher;
mod toast;

pub use clipboard::copy_text;
pub use dispatcher::install;
pub use toast::Toast;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Page entry point: set up logging, build the toast, install the listener
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let toast = Toast::new(&document)?;
    dispatcher::install(&document, toast)?;

    log::info!("copytoast ready");
    Ok(())
}
