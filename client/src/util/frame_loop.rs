//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! The step closure runs once per frame and returns whether it wants
//! another. Dropping the [`FrameLoop`] cancels any queued frame, so a
//! component can tear down mid-animation without a late callback firing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};

struct Shared {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Shared {
    fn schedule(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return false;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => {
                self.handle.set(Some(handle));
                true
            }
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                false
            }
        }
    }

    fn cancel(&self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}

pub struct FrameLoop {
    shared: Rc<Shared>,
}

impl FrameLoop {
    /// Queue `step` for the next frame. Returns `None` when no frame could be
    /// requested (no window, or the browser refused).
    pub fn start(mut step: impl FnMut() -> bool + 'static) -> Option<Self> {
        let shared = Rc::new(Shared { handle: Cell::new(None), callback: RefCell::new(None) });
        let weak = Rc::downgrade(&shared);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.handle.set(None);
            if step() {
                shared.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *shared.callback.borrow_mut() = Some(callback);

        shared.schedule().then_some(Self { shared })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}
