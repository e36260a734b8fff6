//! Browser-side utilities shared by the components.
//!
//! - **User feedback**: blocking alerts for failed uploads and short-lived
//!   toast notices for everything else.
//! - **Formatting**: number rendering for the table cells.
//! - **Files**: reading a picked `web_sys::File` into an `UploadFile`.

use common::gateway::UploadFile;
use common::views::numeric::coerce;
use gloo_file::futures::read_as_bytes;
use js_sys::Date;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Shows a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Displays a notice at the bottom of the screen for three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Two decimals, as the money and tax columns show them.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Shortest form: `3` rather than `3.0`, `2.5` stays `2.5`.
pub fn plain_number(value: f64) -> String {
    format!("{}", value)
}

/// Reads a number typed into an edit field. Empty or malformed input is 0.
pub fn parse_input_number(raw: String) -> f64 {
    coerce(Some(&Value::String(raw)))
}

/// Local date and time of "now", stored as a document's upload date.
pub fn upload_timestamp() -> String {
    Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

/// Loads the picked file into memory for the extraction request.
pub async fn read_upload_file(file: web_sys::File) -> Result<UploadFile, String> {
    let file = gloo_file::File::from(file);
    let bytes = read_as_bytes(&file).await.map_err(|err| err.to_string())?;
    let mime_type = Some(file.raw_mime_type()).filter(|mime| !mime.is_empty());
    Ok(UploadFile {
        name: file.name(),
        mime_type,
        bytes,
    })
}
