use glam::Mat4;

use crate::math::Viewport;
use crate::paint::Color;

use super::{Camera, ShaderId};

/// Render state accumulated while traversing the scene graph.
///
/// Each stack keeps a base entry that is never popped: the identity model
/// matrix and white. The shader stack may be empty, meaning "use the scene
/// default".
#[derive(Debug, Clone)]
pub struct State {
    projection: Mat4,
    view: Mat4,
    matrices: Vec<Mat4>,
    colors: Vec<Color>,
    shaders: Vec<ShaderId>,
}

impl State {
    pub fn new(camera: &dyn Camera, viewport: Viewport) -> Self {
        Self::from_matrices(camera.projection_matrix(viewport), camera.view_matrix())
    }

    pub fn from_matrices(projection: Mat4, view: Mat4) -> Self {
        Self {
            projection,
            view,
            matrices: vec![Mat4::IDENTITY],
            colors: vec![Color::WHITE],
            shaders: Vec::new(),
        }
    }

    // ── matrices ──────────────────────────────────────────────────────────

    /// Saves the current model matrix.
    pub fn push_matrix(&mut self) {
        let top = self.model_matrix();
        self.matrices.push(top);
    }

    /// Restores the model matrix saved by the matching [`push_matrix`](Self::push_matrix).
    pub fn pop_matrix(&mut self) {
        debug_assert!(self.matrices.len() > 1, "pop_matrix called without matching push_matrix");
        if self.matrices.len() > 1 {
            self.matrices.pop();
        }
    }

    /// Post-multiplies the current model matrix by `m`.
    pub fn mult_matrix(&mut self, m: &Mat4) {
        if let Some(top) = self.matrices.last_mut() {
            *top *= *m;
        }
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.matrices.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Model-view-projection matrix for the current model matrix.
    #[inline]
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model_matrix()
    }

    // ── color ─────────────────────────────────────────────────────────────

    pub fn push_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn pop_color(&mut self) {
        debug_assert!(self.colors.len() > 1, "pop_color called without matching push_color");
        if self.colors.len() > 1 {
            self.colors.pop();
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.colors.last().copied().unwrap_or(Color::WHITE)
    }

    // ── shader ────────────────────────────────────────────────────────────

    pub fn push_shader(&mut self, shader: ShaderId) {
        self.shaders.push(shader);
    }

    pub fn pop_shader(&mut self) {
        debug_assert!(!self.shaders.is_empty(), "pop_shader called without matching push_shader");
        self.shaders.pop();
    }

    /// Innermost loaded shader, if any.
    #[inline]
    pub fn shader(&self) -> Option<ShaderId> {
        self.shaders.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;

    fn state() -> State {
        State::from_matrices(Mat4::IDENTITY, Mat4::IDENTITY)
    }

    #[test]
    fn push_pop_restores_model_matrix() {
        let mut st = state();
        st.push_matrix();
        st.mult_matrix(&Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0)));
        assert_eq!(st.model_matrix().w_axis.truncate(), Vec3::new(1.0, 2.0, 0.0));

        st.pop_matrix();
        assert_eq!(st.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn nested_matrices_compose_parent_first() {
        let mut st = state();
        st.push_matrix();
        st.mult_matrix(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        st.push_matrix();
        st.mult_matrix(&Mat4::from_scale(Vec3::splat(2.0)));

        let p = st.model_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn mvp_applies_projection_last() {
        let proj = Mat4::from_scale(Vec3::new(0.5, 0.5, 1.0));
        let mut st = State::from_matrices(proj, Mat4::IDENTITY);
        st.mult_matrix(&Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0)));
        let p = st.mvp().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn color_stack_defaults_to_white() {
        let mut st = state();
        assert_eq!(st.color(), Color::WHITE);
        st.push_color(Color::BLACK);
        assert_eq!(st.color(), Color::BLACK);
        st.pop_color();
        assert_eq!(st.color(), Color::WHITE);
    }

    #[test]
    fn shader_stack_starts_empty() {
        let mut st = state();
        assert_eq!(st.shader(), None);
        st.push_shader(ShaderId(3));
        st.push_shader(ShaderId(4));
        assert_eq!(st.shader(), Some(ShaderId(4)));
        st.pop_shader();
        assert_eq!(st.shader(), Some(ShaderId(3)));
    }
}
