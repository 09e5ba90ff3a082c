//! Browser bindings and pure helpers shared by components.
//!
//! `frame_loop` and `visibility` wrap platform services and only exist in the
//! `hydrate` build. Everything else compiles on both sides.

pub mod clock;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod stats;
pub mod timer;
#[cfg(feature = "hydrate")]
pub mod visibility;
