//! One-shot deferred callback that is cancelled when dropped.
//!
//! Wraps `gloo_timers::callback::Timeout` in the browser. On the server
//! nothing is ever scheduled: event handlers do not run during SSR.

pub struct OneShot {
    #[cfg(feature = "hydrate")]
    _timeout: gloo_timers::callback::Timeout,
}

impl OneShot {
    /// Run `callback` once after `delay_ms`, unless the returned handle is
    /// dropped first.
    #[must_use = "dropping the handle cancels the callback"]
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { _timeout: gloo_timers::callback::Timeout::new(delay_ms, callback) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop((delay_ms, callback));
            Self {}
        }
    }
}
