//! `IntersectionObserver` wrapper reporting how much of an element is on
//! screen.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observation of one element. Disconnects on drop.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatch {
    /// Watch `target`, calling `on_ratio` with the visible fraction each time
    /// it crosses `threshold`. Entries that are not intersecting report `0.0`.
    ///
    /// Returns `None` if the browser has no `IntersectionObserver`.
    pub fn observe(target: &Element, threshold: f64, mut on_ratio: impl FnMut(f64) + 'static) -> Option<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                on_ratio(ratio);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin("0px");

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {err:?}");
                return None;
            }
        };
        observer.observe(target);
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
