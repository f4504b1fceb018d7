//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame yields the
//! `FrameTime` whose `dt` drives `Scene::update`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, DT_MAX, DT_MIN};
