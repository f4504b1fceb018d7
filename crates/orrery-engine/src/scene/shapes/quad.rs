use super::{Mesh, Shape};

/// Square covering `[-1, 1]²`, so it circumscribes a unit [`Disk`](super::Disk).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Quad;

impl Shape for Quad {
    fn mesh(&self) -> Mesh {
        Mesh {
            positions: vec![[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_two_ccw_triangles() {
        let mesh = Quad.mesh();
        assert_eq!(mesh.triangle_count(), 2);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions[i as usize]);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
    }
}
