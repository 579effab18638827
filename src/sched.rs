//! Animation-frame coalescing primitives.
//!
//! Scroll events arrive faster than the display refreshes, so scroll-driven
//! controllers sample at most once per frame. Two flavors exist because the
//! controllers want different semantics: [`FrameGate`] drops requests while
//! a frame is pending, [`FrameTask`] cancels the pending frame and replaces
//! it with the newest request.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

/// At-most-one-per-frame guard. While a callback is pending, further
/// requests are ignored.
#[derive(Default)]
pub struct FrameGate {
    in_flight: Rc<Cell<bool>>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `work` for the next animation frame unless one is already
    /// pending. Outside a browser this is a no-op.
    pub fn request(&self, work: impl FnOnce() + 'static) {
        if self.in_flight.get() {
            return;
        }
        let Some(window) = dom::window() else {
            return;
        };

        let in_flight = Rc::clone(&self.in_flight);
        let mut work = Some(work);
        // The closure drops itself once it has run (holder pattern).
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            in_flight.set(false);
            if let Some(work) = work.take() {
                work();
            }
            holder_for_cb.borrow_mut().take();
        });

        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            self.in_flight.set(true);
            *holder.borrow_mut() = Some(cb);
        }
    }
}

struct PendingFrame {
    handle: i32,
    _cb: Closure<dyn FnMut(f64)>,
}

/// Cancelable single-shot animation-frame task. Scheduling while a frame
/// is pending cancels the pending frame, so only the newest request runs.
#[derive(Default)]
pub struct FrameTask {
    slot: Rc<RefCell<Option<PendingFrame>>>,
}

impl FrameTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending frame with `work`. Outside a browser this is a
    /// no-op.
    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        let Some(window) = dom::window() else {
            return;
        };
        if let Some(pending) = self.slot.borrow_mut().take() {
            let _ = window.cancel_animation_frame(pending.handle);
        }

        let slot = Rc::clone(&self.slot);
        let mut work = Some(work);
        let cb = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            // Frees this closure; wasm-bindgen defers the deallocation
            // until the call returns.
            slot.borrow_mut().take();
            if let Some(work) = work.take() {
                work();
            }
        });

        if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *self.slot.borrow_mut() = Some(PendingFrame { handle, _cb: cb });
        }
    }
}
