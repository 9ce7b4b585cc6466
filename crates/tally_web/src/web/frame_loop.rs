//! `requestAnimationFrame` driver.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Default)]
struct LoopState {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// One pending animation frame at a time.
///
/// The callback returns whether it wants another frame. The closure stays
/// owned here rather than leaked with `forget`.
#[derive(Clone, Default)]
pub(super) struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn start(&self, mut on_frame: impl FnMut(f64) -> bool + 'static) -> Result<(), JsValue> {
        self.cancel();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let weak: Weak<RefCell<LoopState>> = Rc::downgrade(&self.state);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().handle = None;
            if !on_frame(ts) {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut st = state.borrow_mut();
            let next = st
                .callback
                .as_ref()
                .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
            match next {
                Some(Ok(id)) => st.handle = Some(id),
                Some(Err(e)) => web_sys::console::warn_2(&"requestAnimationFrame failed".into(), &e),
                None => {}
            }
        }) as Box<dyn FnMut(f64)>);

        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        let mut st = self.state.borrow_mut();
        st.handle = Some(id);
        st.callback = Some(cb);
        Ok(())
    }

    /// Revoke the pending frame, if any. Safe to call repeatedly.
    ///
    /// The closure itself is freed when the next `start` replaces it or the
    /// loop is dropped, never while it may be executing.
    pub(super) fn cancel(&self) {
        let Some(id) = self.state.borrow_mut().handle.take() else {
            return;
        };
        if let Some(w) = web_sys::window() {
            let _ = w.cancel_animation_frame(id);
        }
    }
}
