use std::path::Path;

use anyhow::{Context, Result};

use orrery_engine::math::Transform;
use orrery_engine::paint::Color;
use orrery_engine::scene::{Disk, Node, RotationEngine, Scene};
use orrery_engine::shader::Shader;

use crate::config::SolarSystemConfig;

const VERTEX_WGSL: &str = include_str!("../shaders/vertex.wgsl");
const FRAGMENT_WGSL: &str = include_str!("../shaders/fragment.wgsl");

/// Links the demo shader, from `dir` when given, else from the bundled sources.
pub fn load_shader(dir: Option<&Path>) -> Result<Shader> {
    let builder = Shader::builder("solar");
    let builder = match dir {
        Some(dir) => {
            log::info!("loading shaders from {}", dir.display());
            builder
                .attach_vertex_file(dir.join("vertex.wgsl"), "vs_main")?
                .attach_fragment_file(dir.join("fragment.wgsl"), "fs_main")?
        }
        None => builder
            .attach_vertex_source(VERTEX_WGSL, "vs_main")
            .attach_fragment_source(FRAGMENT_WGSL, "fs_main"),
    };
    builder.link().context("failed to link solar shader")
}

/// Builds the sun, earth and moon tree and registers one rotation engine per
/// animated transform.
///
/// ```text
/// root [shader]
/// └── sun        T(5,5) S(0.7)  yellow disk
///     └── earth orbit           (engine)
///         └── earth translation T(5,0)
///             ├── earth spin    (engine)
///             │   └── earth scale S(0.5)  blue disk
///             └── moon orbit    (engine)
///                 └── moon translation T(1.3,0)
///                     └── moon scale S(0.2)  white disk
/// ```
pub fn build_scene(config: &SolarSystemConfig, shader: Shader) -> Scene {
    let mut scene = Scene::new();
    let disk = scene.add_shape(Disk::default());
    let shader = scene.add_shader(shader);

    let sun_trf = scene.add_transform(make(|t| t.translate(5.0, 5.0, 0.0).scale(0.7, 0.7, 1.0)));

    let earth_orbit = scene.add_transform(Transform::identity());
    let earth_translation = scene.add_transform(make(|t| t.translate(5.0, 0.0, 0.0)));
    let earth_spin = scene.add_transform(Transform::identity());
    let earth_scale = scene.add_transform(make(|t| t.scale(0.5, 0.5, 1.0)));

    let moon_orbit = scene.add_transform(Transform::identity());
    let moon_translation = scene.add_transform(make(|t| t.translate(1.3, 0.0, 0.0)));
    let moon_scale = scene.add_transform(make(|t| t.scale(0.2, 0.2, 1.0)));

    let moon_body = scene.add_node(
        Node::new()
            .with_transform(moon_scale)
            .with_attribute(Color::rgb(7.0, 7.0, 7.0))
            .with_shape(disk),
    );
    let moon_translation_node =
        scene.add_node(Node::new().with_transform(moon_translation).with_child(moon_body));
    let moon_orbit_node =
        scene.add_node(Node::new().with_transform(moon_orbit).with_child(moon_translation_node));

    let earth_body = scene.add_node(
        Node::new()
            .with_transform(earth_scale)
            .with_attribute(Color::rgb(0.0, 0.0, 0.5))
            .with_shape(disk),
    );
    let earth_spin_node =
        scene.add_node(Node::new().with_transform(earth_spin).with_child(earth_body));
    // The moon hangs off the translation, not the spin, so it ignores the earth's day.
    let earth_translation_node = scene.add_node(
        Node::new()
            .with_transform(earth_translation)
            .with_child(earth_spin_node)
            .with_child(moon_orbit_node),
    );
    let earth_orbit_node = scene
        .add_node(Node::new().with_transform(earth_orbit).with_child(earth_translation_node));

    let sun = scene.add_node(
        Node::new()
            .with_transform(sun_trf)
            .with_attribute(Color::rgb(1.0, 8.0, 0.3))
            .with_shape(disk)
            .with_child(earth_orbit_node),
    );

    let root = scene.add_node(Node::new().with_attribute(shader).with_child(sun));
    scene.set_root(root);

    scene.add_engine(RotationEngine::new(earth_orbit, config.earth_orbit_speed));
    scene.add_engine(RotationEngine::new(earth_spin, config.earth_spin_speed));
    scene.add_engine(RotationEngine::new(moon_orbit, config.moon_orbit_speed));

    scene
}

fn make(f: impl FnOnce(&mut Transform) -> &mut Transform) -> Transform {
    let mut t = Transform::identity();
    f(&mut t);
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::math::{Mat4, Vec3, Viewport};
    use orrery_engine::scene::{Camera, Camera2D, DrawList};

    const EPS: f32 = 1e-3;

    fn system() -> Scene {
        build_scene(&SolarSystemConfig::default(), load_shader(None).unwrap())
    }

    fn draw(scene: &Scene) -> DrawList {
        let mut list = DrawList::new();
        let camera = Camera2D::new(0.0, 10.0, 0.0, 10.0);
        scene.render(&camera, Viewport::new(600.0, 400.0), &mut list);
        list
    }

    fn centers(scene: &Scene) -> Vec<Vec3> {
        draw(scene).items().iter().map(|i| i.model.transform_point3(Vec3::ZERO)).collect()
    }

    fn close(a: Vec3, x: f32, y: f32) -> bool {
        (a.x - x).abs() < EPS && (a.y - y).abs() < EPS
    }

    #[test]
    fn bundled_shader_links() {
        let shader = load_shader(None).unwrap();
        assert_eq!(shader.vertex().entry_point(), "vs_main");
        assert_eq!(shader.fragment().entry_point(), "fs_main");
    }

    #[test]
    fn missing_shader_dir_reports_path() {
        let err = load_shader(Some(Path::new("/nonexistent/orrery"))).unwrap_err();
        assert!(format!("{err:#}").contains("vertex.wgsl"));
    }

    #[test]
    fn initial_layout() {
        let sys = system();
        let c = centers(&sys);
        assert_eq!(c.len(), 3);
        assert!(close(c[0], 5.0, 5.0), "sun at {:?}", c[0]);
        assert!(close(c[1], 8.5, 5.0), "earth at {:?}", c[1]);
        assert!(close(c[2], 9.41, 5.0), "moon at {:?}", c[2]);
    }

    #[test]
    fn bodies_are_colored_and_shaded() {
        let sys = system();
        let mut list = DrawList::new();
        sys.render(&Camera2D::new(0.0, 10.0, 0.0, 10.0), Viewport::new(600.0, 400.0), &mut list);

        let colors: Vec<Color> = list.items().iter().map(|i| i.color).collect();
        assert_eq!(colors[0], Color::rgb(1.0, 1.0, 0.3));
        assert_eq!(colors[1], Color::rgb(0.0, 0.0, 0.5));
        assert_eq!(colors[2], Color::WHITE);

        let shader = list.items()[0].shader;
        assert!(list.items().iter().all(|i| i.shader == shader));
        assert!(sys.shader(shader).is_some_and(|s| s.label() == "solar"));
    }

    #[test]
    fn earth_quarter_orbit() {
        let mut sys = system();
        // 18 × 0.25 s = 4.5 s: earth orbit 90°, moon orbit 270°.
        for _ in 0..18 {
            sys.update(0.25);
        }

        let c = centers(&sys);
        assert!(close(c[0], 5.0, 5.0));
        assert!(close(c[1], 5.0, 8.5), "earth at {:?}", c[1]);
        assert!(close(c[2], 5.91, 8.5), "moon at {:?}", c[2]);
    }

    #[test]
    fn earth_spin_does_not_move_the_moon() {
        let fast_spin = SolarSystemConfig { earth_spin_speed: 1000.0, ..Default::default() };
        let mut a = system();
        let mut b = build_scene(&fast_spin, Shader::flat());
        a.update(0.1);
        b.update(0.1);

        let (ca, cb) = (centers(&a), centers(&b));
        assert!((ca[2] - cb[2]).length() < EPS);
        // The earth disk itself is turned differently.
        let (ea, eb) = (draw(&a).items()[1].model, draw(&b).items()[1].model);
        assert!(!ea.abs_diff_eq(eb, EPS));
    }

    #[test]
    fn camera_maps_world_to_clip() {
        let sys = system();
        let mut list = DrawList::new();
        let camera = Camera2D::new(0.0, 10.0, 0.0, 10.0);
        let viewport = Viewport::new(600.0, 400.0);
        sys.render(&camera, viewport, &mut list);

        // Sun center (5, 5) lands at clip origin.
        let clip = list.items()[0].mvp.project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < EPS && clip.y.abs() < EPS);
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
    }
}
