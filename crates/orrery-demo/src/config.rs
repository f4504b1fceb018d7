use std::path::PathBuf;

use orrery_engine::device::GpuInit;
use orrery_engine::paint::Color;

/// Environment variable naming a directory with `vertex.wgsl` and `fragment.wgsl`.
pub const SHADER_DIR_ENV: &str = "ORRERY_SHADER_DIR";

/// Tunables for the solar system demo.
#[derive(Debug, Clone)]
pub struct SolarSystemConfig {
    /// Earth's orbit around the sun, degrees per second.
    pub earth_orbit_speed: f32,
    /// Earth's spin about its own axis, degrees per second.
    pub earth_spin_speed:  f32,
    /// Moon's orbit around the earth, degrees per second.
    pub moon_orbit_speed:  f32,

    /// World-space rectangle shown by the camera: `(xmin, xmax, ymin, ymax)`.
    pub camera_bounds:  (f32, f32, f32, f32),
    /// Keep world units square instead of stretching to the window.
    pub preserve_aspect: bool,
    pub clear_color:    Color,

    /// Load shaders from this directory instead of the built-in sources.
    pub shader_dir: Option<PathBuf>,
}

impl SolarSystemConfig {
    /// Defaults, with `shader_dir` taken from [`SHADER_DIR_ENV`] when set.
    pub fn from_env() -> Self {
        Self::default().with_shader_dir(std::env::var_os(SHADER_DIR_ENV).map(PathBuf::from))
    }

    pub fn with_shader_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.shader_dir = dir.filter(|d| !d.as_os_str().is_empty());
        self
    }

    /// GPU settings for the demo window.
    ///
    /// Body colors are display values, as written to a classic GL default
    /// framebuffer, so the surface must not re-encode them as sRGB.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit { prefer_srgb: false, ..GpuInit::default() }
    }
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        Self {
            earth_orbit_speed: 20.0,
            earth_spin_speed:  100.0,
            moon_orbit_speed:  60.0,
            camera_bounds:   (0.0, 10.0, 0.0, 10.0),
            preserve_aspect: false,
            clear_color:     Color::BLACK,
            shader_dir: None,
        }
    }
}
