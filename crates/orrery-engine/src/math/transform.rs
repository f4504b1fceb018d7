use glam::{Mat4, Vec3};

/// Affine transform accumulated into a single matrix.
///
/// Every operation post-multiplies the current matrix (`M = M * Op`), the
/// same convention as the fixed-function GL matrix stack: calls read from the
/// outermost frame inwards, so `translate` followed by `scale` scales the
/// geometry first and then moves it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { matrix: Mat4::IDENTITY }
    }

    #[inline]
    pub const fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Inverse matrix. Singular transforms (zero scale) yield non-finite values.
    #[inline]
    pub fn inverse(&self) -> Mat4 {
        self.matrix.inverse()
    }

    pub fn load_identity(&mut self) -> &mut Self {
        self.matrix = Mat4::IDENTITY;
        self
    }

    pub fn multiply(&mut self, m: &Mat4) -> &mut Self {
        self.matrix *= *m;
        self
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.multiply(&Mat4::from_translation(Vec3::new(x, y, z)))
    }

    /// Rotates by `degrees` around the axis `(x, y, z)`.
    ///
    /// The axis does not need to be normalized; a zero axis leaves the
    /// transform unchanged.
    pub fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let Some(axis) = Vec3::new(x, y, z).try_normalize() else {
            return self;
        };
        self.multiply(&Mat4::from_axis_angle(axis, degrees.to_radians()))
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.multiply(&Mat4::from_scale(Vec3::new(x, y, z)))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec4;

    fn apply(t: &Transform, x: f32, y: f32) -> (f32, f32) {
        let p = t.matrix() * Vec4::new(x, y, 0.0, 1.0);
        (p.x, p.y)
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    #[test]
    fn new_transform_is_identity() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translate_then_scale_scales_first() {
        let mut t = Transform::identity();
        t.translate(5.0, 5.0, 0.0).scale(0.7, 0.7, 1.0);

        // The unit-radius rim lands 0.7 away from the translated center.
        assert!(close(apply(&t, 1.0, 0.0), (5.7, 5.0)));
        assert!(close(apply(&t, 0.0, 0.0), (5.0, 5.0)));
    }

    #[test]
    fn rotate_about_z_is_counter_clockwise_in_degrees() {
        let mut t = Transform::identity();
        t.rotate(90.0, 0.0, 0.0, 1.0);
        assert!(close(apply(&t, 1.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn rotations_accumulate() {
        let mut t = Transform::identity();
        for _ in 0..4 {
            t.rotate(45.0, 0.0, 0.0, 1.0);
        }
        assert!(close(apply(&t, 1.0, 0.0), (-1.0, 0.0)));
    }

    #[test]
    fn unnormalized_axis_is_accepted() {
        let mut a = Transform::identity();
        a.rotate(30.0, 0.0, 0.0, 5.0);
        let mut b = Transform::identity();
        b.rotate(30.0, 0.0, 0.0, 1.0);
        assert!(a.matrix().abs_diff_eq(b.matrix(), 1e-6));
    }

    #[test]
    fn zero_axis_rotation_is_ignored() {
        let mut t = Transform::identity();
        t.rotate(90.0, 0.0, 0.0, 0.0);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn load_identity_resets() {
        let mut t = Transform::identity();
        t.translate(1.0, 2.0, 0.0).rotate(10.0, 0.0, 0.0, 1.0);
        t.load_identity();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn inverse_undoes_transform() {
        let mut t = Transform::identity();
        t.translate(3.0, -2.0, 0.0).rotate(33.0, 0.0, 0.0, 1.0).scale(2.0, 0.5, 1.0);
        assert!((t.matrix() * t.inverse()).abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }
}
