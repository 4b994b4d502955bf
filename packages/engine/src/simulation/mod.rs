//! Scene - the simulation context
//!
//! Owns the physics world, the viewport walls, the text side table, the RNG
//! and the per-frame display list. Everything the frame loop, the resize
//! handler and the pointer handlers touch goes through one `Scene` value; the
//! browser layer (`api/`) only feeds it readings and replays its commands.

use rand::rngs::SmallRng;

use crate::domain::config::DemoConfig;
use crate::domain::orientation::{GravityVector, OrientationReading};
use crate::systems::bounds::BoundsManager;
use crate::systems::physics::{BodyHandle, PhysicsWorld};
use crate::systems::text_bodies::{TextBodies, TextMeasure};
use crate::core::Vec2;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;

pub use frame_stats::FrameStats;
pub use render_extract::{DrawCommand, TextAlign, TextBaseline};
pub use render_extract::{BACKGROUND_COLOR, INK_COLOR, OVERLAY_FONT, OVERLAY_INSET, OVERLAY_LINE_HEIGHT};

pub(crate) use perf_timer::PerfTimer;

pub struct Scene {
    config: DemoConfig,
    physics: PhysicsWorld,
    bounds: BoundsManager,
    texts: TextBodies,

    // Viewport (canvas size in pixels)
    width: f64,
    height: f64,

    // State
    rng: SmallRng,
    frame: u64,
    commands: Vec<DrawCommand>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl Scene {
    /// Empty scene for a `width` x `height` viewport; seed from the config.
    pub fn new(config: DemoConfig, width: f64, height: f64) -> Self {
        init::create_scene(config, width, height, None)
    }

    pub fn with_seed(config: DemoConfig, width: f64, height: f64, seed: u64) -> Self {
        init::create_scene(config, width, height, Some(seed))
    }

    pub fn config(&self) -> &DemoConfig { &self.config }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.physics.body_count() }

    pub fn physics(&self) -> &PhysicsWorld { &self.physics }

    pub fn bounds(&self) -> &BoundsManager { &self.bounds }

    pub fn text_bodies(&self) -> &TextBodies { &self.texts }

    /// Commands produced by the last `frame`/`render`
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    // === BOUNDS ===

    /// Add the four viewport walls
    pub fn create_bounds(&mut self) {
        self.bounds.create(&mut self.physics, self.width, self.height);
    }

    /// Re-fit the walls to the current viewport (no-op before `create_bounds`)
    pub fn update_bounds(&mut self) {
        self.bounds.update(&mut self.physics, self.width, self.height);
    }

    /// New viewport size, walls follow.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.update_bounds();
    }

    // === TEXT BODIES ===

    /// Label body centered at `(x, y)`, measured with the configured font
    pub fn create_text_body<M>(&mut self, measure: &M, text: &str, x: f64, y: f64) -> Result<BodyHandle, M::Error>
    where
        M: TextMeasure + ?Sized,
    {
        init::create_text_body(self, measure, text, x, y)
    }

    /// Spawn the configured number of labels at random positions
    pub fn populate<M>(&mut self, measure: &M) -> Result<Vec<BodyHandle>, M::Error>
    where
        M: TextMeasure + ?Sized,
    {
        init::populate(self, measure)
    }

    // === GRAVITY ===

    pub fn set_gravity(&mut self, gravity: GravityVector) {
        settings::set_gravity(self, gravity);
    }

    pub fn gravity(&self) -> GravityVector {
        settings::get_gravity(self)
    }

    /// Point gravity along the tilt; keeps the current gravity without a reading
    pub fn update_gravity(&mut self, reading: Option<&OrientationReading>) {
        step::update_gravity(self, reading);
    }

    // === POINTER ===

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<BodyHandle> {
        self.physics.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.physics.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.physics.pointer_up();
    }

    // === FRAME ===

    /// Advance physics by one step
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Rebuild the display list without stepping
    pub fn render(&mut self, reading: Option<&OrientationReading>) -> &[DrawCommand] {
        step::render(self, reading);
        &self.commands
    }

    /// Full frame: step, gravity from `reading`, display list
    pub fn frame_tick(&mut self, reading: Option<&OrientationReading>) -> &[DrawCommand] {
        step::frame(self, reading);
        &self.commands
    }

    // === SETTINGS ===

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        settings::set_debug_overlay(self, enabled);
    }

    /// Enable or disable per-frame timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame snapshot (zero timings when perf disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        settings::get_frame_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
