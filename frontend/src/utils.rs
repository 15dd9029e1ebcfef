use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlInputElement, HtmlTextAreaElement, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(w) = get_window() {
        if let Err(err) = w.alert_with_message(message) {
            log::error!("alert: {:?}", err);
        }
    }
}

pub fn value_from_target(target: Option<EventTarget>) -> String {
    target
        .map(|target| get_value_from_input(JsValue::from(target)))
        .unwrap_or_default()
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}
