use std::f32::consts::TAU;

use super::{Mesh, Shape};

/// Unit disk centered at the origin, tessellated as a triangle fan.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disk {
    nslice: u16,
}

impl Disk {
    pub const DEFAULT_SLICES: u16 = 64;
    pub const MIN_SLICES: u16 = 3;
    /// Center + closing vertex must still fit `u16` indices.
    pub const MAX_SLICES: u16 = u16::MAX - 2;

    /// Creates a disk with `nslice` rim segments, clamped to
    /// `[MIN_SLICES, MAX_SLICES]`.
    pub fn new(nslice: u32) -> Self {
        let nslice = nslice.clamp(Self::MIN_SLICES as u32, Self::MAX_SLICES as u32) as u16;
        Self { nslice }
    }

    #[inline]
    pub fn slices(&self) -> u16 {
        self.nslice
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self { nslice: Self::DEFAULT_SLICES }
    }
}

impl Shape for Disk {
    fn mesh(&self) -> Mesh {
        let n = self.nslice;

        // Center, then the rim; the rim repeats its first vertex to close the fan.
        let mut positions = Vec::with_capacity(n as usize + 2);
        positions.push([0.0, 0.0]);
        for i in 0..=n {
            let angle = TAU * i as f32 / n as f32;
            positions.push([angle.cos(), angle.sin()]);
        }

        let mut indices = Vec::with_capacity(n as usize * 3);
        for i in 1..=n {
            indices.extend_from_slice(&[0, i, i + 1]);
        }

        Mesh { positions, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disk_has_64_slices() {
        let mesh = Disk::default().mesh();
        assert_eq!(mesh.positions.len(), 66);
        assert_eq!(mesh.triangle_count(), 64);
    }

    #[test]
    fn slice_count_is_clamped() {
        assert_eq!(Disk::new(0).slices(), Disk::MIN_SLICES);
        assert_eq!(Disk::new(2).slices(), 3);
        assert_eq!(Disk::new(u32::MAX).slices(), Disk::MAX_SLICES);
    }

    #[test]
    fn rim_lies_on_unit_circle_and_closes() {
        let mesh = Disk::new(8).mesh();
        assert_eq!(mesh.positions[0], [0.0, 0.0]);
        for p in &mesh.positions[1..] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-6);
        }
        let first = mesh.positions[1];
        let last = *mesh.positions.last().unwrap();
        assert!((first[0] - last[0]).abs() < 1e-6 && (first[1] - last[1]).abs() < 1e-6);
    }

    #[test]
    fn fan_triangles_share_the_center() {
        let mesh = Disk::new(3).mesh();
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn largest_disk_indices_fit_u16() {
        let mesh = Disk::new(u32::MAX).mesh();
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert_eq!(max, mesh.positions.len() - 1);
    }
}
