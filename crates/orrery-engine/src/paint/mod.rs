//! Color model shared between the scene graph and renderers.
//!
//! Colors are linear premultiplied alpha. Geometry types live in `math`.

pub mod color;

pub use color::Color;
