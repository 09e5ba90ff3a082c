//! Scroll-triggered count-up engine for headline statistics.
//!
//! This crate is platform independent: it never touches the DOM. The host
//! component owns the browser plumbing (an `IntersectionObserver` for
//! visibility, `requestAnimationFrame` for ticks) and forwards observations and
//! timestamps into a [`animator::CountUp`], re-rendering whatever
//! [`animator::CountUp::display`] returns after each tick.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`animator`] | Per-display engine: start, tick, snap, teardown |
//! | [`trigger`] | One-shot visibility latch (`Unarmed -> Armed -> Fired`) |
//! | [`request`] | Animation parameters and final string assembly |
//! | [`format`] | Fixed-decimal formatting with thousands grouping |
//! | [`easing`] | Progress and ease-out cubic curve |
//! | [`consts`] | Shared defaults (duration, threshold, separator) |

pub mod animator;
pub mod consts;
pub mod easing;
pub mod format;
pub mod request;
pub mod trigger;
