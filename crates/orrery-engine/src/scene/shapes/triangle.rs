use super::{Mesh, Shape};

/// Equilateral triangle inscribed in the unit circle, apex at +Y.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Triangle;

impl Shape for Triangle {
    fn mesh(&self) -> Mesh {
        let half_base = 3.0_f32.sqrt() / 2.0;
        Mesh {
            positions: vec![[0.0, 1.0], [-half_base, -0.5], [half_base, -0.5]],
            indices: vec![0, 1, 2],
        }
    }
}
