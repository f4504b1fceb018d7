//! Math types shared by the scene graph and renderers.
//!
//! World space:
//! - 2D content lives in the z = 0 plane
//! - +X right, +Y up (cameras decide how world maps to the window)
//!
//! Matrices are `glam` column-major 4x4 so they can be uploaded to WGSL
//! `mat4x4<f32>` uniforms as-is.

mod transform;
mod viewport;

pub use glam::{Mat4, Vec2, Vec3, Vec4};
pub use transform::Transform;
pub use viewport::Viewport;
