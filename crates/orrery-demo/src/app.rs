use orrery_engine::core::{App, AppControl, FrameCtx};
use orrery_engine::input::Key;
use orrery_engine::paint::Color;
use orrery_engine::render::SceneRenderer;
use orrery_engine::scene::{Camera2D, DrawList, Scene};

use crate::config::SolarSystemConfig;

/// Animates and draws a scene each frame; `Q` or `Escape` quits.
pub struct OrreryApp {
    scene:    Scene,
    camera:   Camera2D,
    clear:    Color,
    list:     DrawList,
    renderer: SceneRenderer,
}

impl OrreryApp {
    pub fn new(config: &SolarSystemConfig, scene: Scene) -> Self {
        let (xmin, xmax, ymin, ymax) = config.camera_bounds;
        Self {
            scene,
            camera:   Camera2D::new(xmin, xmax, ymin, ymax).preserve_aspect(config.preserve_aspect),
            clear:    config.clear_color,
            list:     DrawList::new(),
            renderer: SceneRenderer::new(),
        }
    }
}

fn quit_requested(ctx: &FrameCtx<'_, '_>) -> bool {
    [Key::Q, Key::Escape].into_iter().any(|k| ctx.input_frame.pressed(k))
}

impl App for OrreryApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if quit_requested(ctx) {
            log::info!("quit key pressed");
            ctx.runtime.close_window(ctx.window.id);
            return AppControl::Continue;
        }

        self.scene.update(ctx.time.dt);

        let Self { scene, camera, clear, list, renderer } = self;
        ctx.render(*clear, |rctx, target| {
            scene.render(&*camera, rctx.viewport, list);
            renderer.render(rctx, target, scene, list);
        })
    }
}
