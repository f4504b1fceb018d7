//! Orrery engine crate.
//!
//! A small 2D scene-graph renderer: a node tree of transforms, attributes and
//! shapes, animated by per-frame engines and drawn through wgpu inside a winit
//! runtime.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shader;
pub mod time;
pub mod window;
