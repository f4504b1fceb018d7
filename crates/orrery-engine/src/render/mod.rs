//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - geometry arrives in shape-local space with a precomputed MVP per draw
//! - items are painted in draw-list order (no depth buffer)

mod ctx;
mod scene_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
