//! Number that counts up from zero the first time it scrolls into view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the engine's start value on the server. After hydration an
//! `IntersectionObserver` arms the `countup` engine and a frame loop drives
//! it to the target. Cleanup cancels the loop and disconnects the observer.

use countup::animator::CountUp;
use countup::request::CountUpRequest;
use leptos::prelude::*;

/// Animated number display.
#[component]
pub fn CountUpValue(request: CountUpRequest, #[prop(into, optional)] class: String) -> impl IntoView {
    let engine = StoredValue::new(CountUp::new(request));
    let text = RwSignal::new(engine.with_value(CountUp::display));
    let span_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    live::wire(engine, text, span_ref);

    view! {
        <span class=class node_ref=span_ref>
            {move || text.get()}
        </span>
    }
}

#[cfg(feature = "hydrate")]
mod live {
    use countup::animator::{CountUp, Tick};
    use countup::consts::VISIBILITY_THRESHOLD;
    use leptos::prelude::*;

    use crate::util::clock::now_ms;
    use crate::util::frame_loop::FrameLoop;
    use crate::util::visibility::VisibilityWatch;

    type Engine = StoredValue<CountUp>;

    /// One frame: tick the engine and publish its display. Returns whether
    /// another frame is wanted.
    fn advance(engine: Engine, text: RwSignal<String>) -> bool {
        let Some((tick, shown)) = engine.try_update_value(|e| {
            let tick = e.tick(now_ms());
            (tick, e.display())
        }) else {
            return false;
        };
        text.set(shown);
        tick == Tick::Continue
    }

    fn publish(engine: Engine, text: RwSignal<String>) {
        if let Some(shown) = engine.try_with_value(CountUp::display) {
            text.set(shown);
        }
    }

    pub(super) fn wire(engine: Engine, text: RwSignal<String>, span_ref: NodeRef<leptos::html::Span>) {
        let frames = StoredValue::new_local(None::<FrameLoop>);
        let watch = StoredValue::new_local(None::<VisibilityWatch>);

        Effect::new(move || {
            let Some(el) = span_ref.get() else {
                return;
            };
            if watch.with_value(Option::is_some) {
                return;
            }
            engine.update_value(CountUp::mount);

            let observed = VisibilityWatch::observe(&el, VISIBILITY_THRESHOLD, move |ratio| {
                let started = engine.try_update_value(|e| e.on_visibility(ratio, now_ms())).unwrap_or(false);
                if !started {
                    return;
                }
                let frame_loop = FrameLoop::start(move || advance(engine, text));
                if frame_loop.is_none() {
                    // No frames available: show the final value.
                    engine.try_update_value(CountUp::complete);
                    publish(engine, text);
                }
                frames.try_update_value(|slot| *slot = frame_loop);
            });

            if observed.is_none() {
                engine.update_value(CountUp::complete);
                publish(engine, text);
            }
            watch.set_value(observed);
        });

        on_cleanup(move || {
            frames.try_update_value(Option::take);
            if engine.try_update_value(CountUp::unmount).unwrap_or(false) {
                log::debug!("count-up unmounted mid-animation");
            }
            watch.try_update_value(Option::take);
        });
    }
}
