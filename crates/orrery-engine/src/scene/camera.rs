use glam::Mat4;

use crate::math::Viewport;

/// Supplies the view and projection used by a render traversal.
pub trait Camera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Projection for a drawable of the given size.
    fn projection_matrix(&self, viewport: Viewport) -> Mat4;
}

/// Orthographic camera showing the world rectangle
/// `[xmin, xmax] x [ymin, ymax]`, +Y up.
///
/// By default the rectangle is stretched over the whole window, like a raw
/// GL ortho projection. With [`preserve_aspect`](Self::preserve_aspect) the
/// visible region is widened along one axis instead, keeping world units
/// square and the requested rectangle centered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    xmin: f32,
    xmax: f32,
    ymin: f32,
    ymax: f32,
    preserve_aspect: bool,
}

impl Camera2D {
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        debug_assert!(xmin != xmax && ymin != ymax, "Camera2D needs a non-empty rectangle");
        Self { xmin, xmax, ymin, ymax, preserve_aspect: false }
    }

    pub fn preserve_aspect(mut self, enabled: bool) -> Self {
        self.preserve_aspect = enabled;
        self
    }

    /// World-space bounds actually visible in `viewport`, as `(xmin, xmax, ymin, ymax)`.
    pub fn visible_bounds(&self, viewport: Viewport) -> (f32, f32, f32, f32) {
        let (mut x0, mut x1, mut y0, mut y1) = (self.xmin, self.xmax, self.ymin, self.ymax);
        if !self.preserve_aspect || !viewport.is_valid() {
            return (x0, x1, y0, y1);
        }

        let w = x1 - x0;
        let h = y1 - y0;
        let window_aspect = viewport.aspect();

        if window_aspect > (w / h).abs() {
            let half = 0.5 * h.abs() * window_aspect * w.signum();
            let cx = 0.5 * (x0 + x1);
            x0 = cx - half;
            x1 = cx + half;
        } else {
            let half = 0.5 * w.abs() / window_aspect * h.signum();
            let cy = 0.5 * (y0 + y1);
            y0 = cy - half;
            y1 = cy + half;
        }
        (x0, x1, y0, y1)
    }
}

impl Camera for Camera2D {
    fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        let (x0, x1, y0, y1) = self.visible_bounds(viewport);
        Mat4::orthographic_rh(x0, x1, y0, y1, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;

    fn ndc(cam: &Camera2D, viewport: Viewport, x: f32, y: f32) -> (f32, f32) {
        let p = cam.projection_matrix(viewport).project_point3(Vec3::new(x, y, 0.0));
        (p.x, p.y)
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5
    }

    #[test]
    fn corners_map_to_ndc_corners() {
        let cam = Camera2D::new(0.0, 10.0, 0.0, 10.0);
        let vp = Viewport::new(600.0, 400.0);
        assert!(close(ndc(&cam, vp, 0.0, 0.0), (-1.0, -1.0)));
        assert!(close(ndc(&cam, vp, 10.0, 10.0), (1.0, 1.0)));
        assert!(close(ndc(&cam, vp, 5.0, 5.0), (0.0, 0.0)));
    }

    #[test]
    fn z_zero_lies_inside_depth_range() {
        let cam = Camera2D::new(0.0, 10.0, 0.0, 10.0);
        let p = cam
            .projection_matrix(Viewport::new(100.0, 100.0))
            .project_point3(Vec3::new(5.0, 5.0, 0.0));
        assert!((0.0..=1.0).contains(&p.z));
    }

    #[test]
    fn stretched_camera_ignores_window_shape() {
        let cam = Camera2D::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(cam.visible_bounds(Viewport::new(600.0, 400.0)), (0.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn preserve_aspect_widens_wide_windows() {
        let cam = Camera2D::new(0.0, 10.0, 0.0, 10.0).preserve_aspect(true);
        let (x0, x1, y0, y1) = cam.visible_bounds(Viewport::new(600.0, 400.0));
        assert!((x0 - -2.5).abs() < 1e-5 && (x1 - 12.5).abs() < 1e-5);
        assert_eq!((y0, y1), (0.0, 10.0));
    }

    #[test]
    fn preserve_aspect_heightens_tall_windows() {
        let cam = Camera2D::new(0.0, 10.0, 0.0, 10.0).preserve_aspect(true);
        let (x0, x1, y0, y1) = cam.visible_bounds(Viewport::new(400.0, 800.0));
        assert_eq!((x0, x1), (0.0, 10.0));
        assert!((y0 - -5.0).abs() < 1e-5 && (y1 - 15.0).abs() < 1e-5);
    }

    #[test]
    fn default_view_is_identity() {
        assert_eq!(Camera2D::new(0.0, 1.0, 0.0, 1.0).view_matrix(), Mat4::IDENTITY);
    }
}
