use crate::config::SceneConfig;
use crate::error::LayoutError;
use crate::layout::Layouts;
use crate::mode::{Mode, ModeController};
use crate::morph::MorphEngine;
use crate::outline::OutlineProvider;
use crate::particles::assign_colors;
use rand::prelude::*;

/// One interactive session: layouts, particle state and the current mode.
///
/// Typical usage:
/// - Construct with `Scene::new(config, &provider, seed)`
/// - Call `click()` on user clicks and `frame(delta, elapsed)` every tick
/// - Read `engine()` buffers for rendering, then `mark_uploaded()`
pub struct Scene {
    config: SceneConfig,
    layouts: Layouts,
    engine: MorphEngine,
    controller: ModeController,
    rng: StdRng,
}

impl Scene {
    pub fn new(
        config: SceneConfig,
        provider: &dyn OutlineProvider,
        seed: u64,
    ) -> Result<Self, LayoutError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let layouts = Layouts::build(&config, provider, &mut rng)?;
        let colors = assign_colors(config.count, config.sphere_count, &mut rng);
        let engine = MorphEngine::new(&colors, config.sphere_count, config.morph_rate);
        log::info!(
            "scene ready: {} spheres, {} cubes",
            config.sphere_count,
            config.cube_count()
        );
        Ok(Self {
            config,
            layouts,
            engine,
            controller: ModeController::default(),
            rng,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn layouts(&self) -> &Layouts {
        &self.layouts
    }

    pub fn engine(&self) -> &MorphEngine {
        &self.engine
    }

    pub fn mode(&self) -> Mode {
        self.controller.current()
    }

    /// Advance the mode cycle.
    pub fn click(&mut self) -> Mode {
        self.controller.trigger()
    }

    pub fn frame(&mut self, delta: f32, elapsed: f32) {
        let mode = self.controller.current();
        self.engine.update(&self.layouts, mode, delta, elapsed);
    }

    /// Rebuild every layout, e.g. once the outline resource has loaded.
    ///
    /// Particles keep their current positions and glide to the new targets.
    pub fn rebuild_layouts(&mut self, provider: &dyn OutlineProvider) -> Result<(), LayoutError> {
        self.layouts = Layouts::build(&self.config, provider, &mut self.rng)?;
        Ok(())
    }

    /// Clear both dirty flags after the renderer copied the buffers.
    pub fn mark_uploaded(&mut self) {
        let (spheres, cubes) = self.engine.buffers_mut();
        spheres.mark_clean();
        cubes.mark_clean();
    }
}
