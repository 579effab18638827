//! web-sys lookup and event-listener glue shared by the controllers.
//!
//! Lookups return `Option`/empty collections instead of erroring so each
//! controller can decline to activate when its elements are missing.
//! Listener registration leaks the closure intentionally: every listener
//! here lives for the rest of the page's lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector).ok())
}

pub fn query_all_within(element: &Element, selector: &str) -> Vec<Element> {
    collect(element.query_selector_all(selector).ok())
}

fn collect(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove `class` on `element` so its presence tracks `on`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Attach a permanent click listener.
pub fn on_click(target: &EventTarget, handler: impl FnMut() + 'static) {
    on_event(target, "click", handler);
}

/// Attach a permanent listener for `kind` events.
pub fn on_event(target: &EventTarget, kind: &str, handler: impl FnMut() + 'static) {
    let cb = Closure::<dyn FnMut()>::new(handler);
    let _ = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Attach a listener expected to fire at most once.
pub fn on_event_once(target: &EventTarget, kind: &str, handler: impl FnOnce() + 'static) {
    let cb = Closure::once(handler);
    let _ = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Attach a permanent passive scroll listener on the window.
pub fn on_scroll(handler: impl FnMut() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let cb = Closure::<dyn FnMut()>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        cb.as_ref().unchecked_ref(),
        &options,
    );
    cb.forget();
}
