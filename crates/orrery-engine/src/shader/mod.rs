//! Shader programs.
//!
//! A [`Shader`] is the CPU-side description of a linked WGSL program: one
//! vertex and one fragment stage. Renderers turn it into a pipeline.
//!
//! Every program must match the scene renderer's interface:
//!
//! ```wgsl
//! struct DrawUniform {
//!     mvp:   mat4x4<f32>,
//!     color: vec4<f32>,   // linear, premultiplied
//! };
//! @group(0) @binding(0) var<uniform> draw: DrawUniform;
//! // vertex input: @location(0) position: vec2<f32>
//! ```

mod program;

pub use program::{Shader, ShaderBuilder, ShaderStage};
