//! Reveal-on-viewport-entry animations.
//!
//! Elements carrying the reveal marker get an `is-visible` class the first
//! time a tenth of their area enters the viewport. The class is never
//! removed and observation is never cancelled, so later exits and
//! re-entries change nothing. Platforms without `IntersectionObserver`
//! reveal everything immediately so content is never left hidden.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::consts::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use crate::dom;

/// Whether the running environment provides `IntersectionObserver`.
#[must_use]
pub fn observer_supported() -> bool {
    dom::window().is_some_and(|window| {
        js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    })
}

pub fn mount(document: &Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    if observer_supported() {
        observe(&elements);
    } else {
        reveal_immediately(&elements);
    }
}

fn observe(elements: &[Element]) {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    dom::set_class(&entry.target(), REVEAL_VISIBLE_CLASS, true);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let Ok(observer) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        reveal_immediately(elements);
        return;
    };
    for element in elements {
        observer.observe(element);
    }
    // The browser keeps the observer alive while it has targets.
    cb.forget();
}

/// Fallback: mark everything visible with explicit inline styles.
fn reveal_immediately(elements: &[Element]) {
    for element in elements {
        dom::set_class(element, REVEAL_VISIBLE_CLASS, true);
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "none");
        }
    }
}
