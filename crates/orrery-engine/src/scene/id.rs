//! Opaque handles into the stores owned by a [`Scene`](super::Scene).

/// Handle to a node stored in a scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Handle to a transform stored in [`Transforms`](super::Transforms).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TransformId(pub(crate) usize);

/// Handle to a shape registered with a scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShapeId(pub(crate) usize);

/// Handle to a shader registered with a scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub(crate) usize);

impl ShaderId {
    /// The built-in flat shader; every scene registers it first.
    pub const DEFAULT: ShaderId = ShaderId(0);
}
