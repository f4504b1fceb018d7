//! Geometry owners.
//!
//! Shapes produce CPU meshes in their local space; renderers upload each
//! mesh once and draw it with whatever state the traversal accumulated.
//!
//! Extending:
//! - add a shape module here implementing [`Shape`]
//! - register instances with `Scene::add_shape`

mod disk;
mod quad;
mod triangle;

pub use disk::Disk;
pub use quad::Quad;
pub use triangle::Triangle;

/// Triangle-list geometry in a shape's local 2D space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 2]>,
    pub indices: Vec<u16>,
}

impl Mesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Something the scene graph can draw.
pub trait Shape: std::fmt::Debug {
    /// Builds the shape's geometry. Called once per renderer, not per frame.
    fn mesh(&self) -> Mesh;
}
