use super::{TransformId, Transforms};

/// Per-frame animation hook.
///
/// Engines run once per `Scene::update`, in registration order, and may
/// mutate any transform in the scene.
pub trait Engine {
    /// Advances the engine by `dt` seconds.
    fn update(&mut self, dt: f32, transforms: &mut Transforms);
}

/// Spins a transform about +Z at a constant angular speed.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    target: TransformId,
    /// Degrees per second; negative speeds spin clockwise.
    speed: f32,
    warned_missing: bool,
}

impl RotationEngine {
    pub fn new(target: TransformId, speed: f32) -> Self {
        Self { target, speed, warned_missing: false }
    }

    #[inline]
    pub fn target(&self) -> TransformId {
        self.target
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Engine for RotationEngine {
    fn update(&mut self, dt: f32, transforms: &mut Transforms) {
        match transforms.get_mut(self.target) {
            Some(t) => {
                t.rotate(self.speed * dt, 0.0, 0.0, 1.0);
            }
            None if !self.warned_missing => {
                log::warn!("rotation engine target {:?} does not exist; ignoring", self.target);
                self.warned_missing = true;
            }
            None => {}
        }
    }
}

/// Adapts a closure into an [`Engine`].
pub struct FnEngine<F>(pub F);

impl<F> Engine for FnEngine<F>
where
    F: FnMut(f32, &mut Transforms),
{
    fn update(&mut self, dt: f32, transforms: &mut Transforms) {
        (self.0)(dt, transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::{Mat4, Vec3};

    use crate::math::Transform;

    #[test]
    fn rotation_engine_advances_by_speed_times_dt() {
        let mut transforms = Transforms::new();
        let id = transforms.insert(Transform::identity());
        let mut engine = RotationEngine::new(id, 20.0);

        for _ in 0..9 {
            engine.update(0.5, &mut transforms);
        }

        // 9 * 0.5 s * 20 °/s = 90°
        let expected = Mat4::from_rotation_z(90f32.to_radians());
        assert!(transforms.get(id).unwrap().matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn rotation_engine_composes_with_existing_transform() {
        let mut transforms = Transforms::new();
        let mut start = Transform::identity();
        start.translate(5.0, 0.0, 0.0);
        let id = transforms.insert(start);

        RotationEngine::new(id, 90.0).update(1.0, &mut transforms);

        // Rotation is applied in the translated frame: the origin stays put.
        let m = transforms.get(id).unwrap().matrix();
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(5.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn missing_target_is_ignored() {
        let mut other = Transforms::new();
        other.insert(Transform::identity());
        let dangling = other.insert(Transform::identity());

        let mut transforms = Transforms::new();
        let mut engine = RotationEngine::new(dangling, 10.0);
        engine.update(1.0, &mut transforms);
        engine.update(1.0, &mut transforms);
        assert!(transforms.is_empty());
    }

    #[test]
    fn closures_run_as_engines() {
        let mut transforms = Transforms::new();
        let id = transforms.insert(Transform::identity());
        let mut engine = FnEngine(move |dt: f32, ts: &mut Transforms| {
            if let Some(t) = ts.get_mut(id) {
                t.translate(dt, 0.0, 0.0);
            }
        });

        engine.update(0.25, &mut transforms);
        engine.update(0.25, &mut transforms);

        let m = transforms.get(id).unwrap().matrix();
        assert_eq!(m.w_axis.x, 0.5);
    }
}
