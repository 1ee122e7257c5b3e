//! Browser side of printing: DOM inspection, barcode rendering, the native
//! print dialog.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the off-screen container holding the labels to print
pub const PRINT_AREA_ID: &str = "label-print-area";

#[wasm_bindgen]
extern "C" {
    /// `JsBarcode(element, value, options)` from the script loaded by `index.html`
    #[wasm_bindgen(catch, js_name = JsBarcode)]
    fn js_barcode(element: &web_sys::Element, value: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BarcodeOptions {
    format: &'static str,
    width: u32,
    height: u32,
    display_value: bool,
    margin: u32,
    background: &'static str,
    line_color: &'static str,
}

const LABEL_BARCODE: BarcodeOptions = BarcodeOptions {
    format: "CODE128",
    width: 2,
    height: 106,
    display_value: false,
    margin: 0,
    background: "transparent",
    line_color: "#000000",
};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Number of labels committed to the print area
pub fn rendered_label_count() -> usize {
    document()
        .and_then(|doc| {
            doc.query_selector_all(&format!("#{} .label-print", PRINT_AREA_ID))
                .ok()
        })
        .map(|list| list.length() as usize)
        .unwrap_or(0)
}

/// Draw every `svg.label-barcode` under `scope` (a CSS selector)
pub fn render_barcodes(scope: &str) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(list) = doc.query_selector_all(&format!("{} svg.label-barcode", scope)) else {
        return;
    };
    let options = match serde_wasm_bindgen::to_value(&LABEL_BARCODE) {
        Ok(options) => options,
        Err(e) => {
            log::error!("Failed to build barcode options: {}", e);
            return;
        }
    };

    for idx in 0..list.length() {
        let Some(element) = list.item(idx).and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let value = element.get_attribute("data-value").unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        if let Err(e) = js_barcode(&element, &value, &options) {
            log::warn!("Barcode rendering failed for {}: {:?}", value, e);
        }
    }
}

/// Open the browser print dialog with `title` as document title.
///
/// Failures of the dialog itself are only logged.
pub fn invoke_print(title: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let doc = window.document();
    let previous_title = doc.as_ref().map(|d| d.title());
    if let Some(doc) = &doc {
        doc.set_title(title);
    }

    if let Err(e) = window.print() {
        log::warn!("window.print() failed: {:?}", e);
    }

    if let (Some(doc), Some(previous)) = (doc, previous_title) {
        doc.set_title(&previous);
    }
}
