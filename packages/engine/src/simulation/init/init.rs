use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::random_in_range;
use crate::domain::config::DemoConfig;
use crate::systems::bounds::BoundsManager;
use crate::systems::physics::{BodyHandle, PhysicsSettings, PhysicsWorld};
use crate::systems::text_bodies::{TextBodies, TextMeasure};

use super::frame_stats::FrameStats;
use super::Scene;

/// Seed used when neither the caller nor the config provides one
const DEFAULT_SEED: u64 = 12345;

pub(super) fn create_scene(config: DemoConfig, width: f64, height: f64, seed: Option<u64>) -> Scene {
    let seed = seed.or(config.seed).unwrap_or(DEFAULT_SEED);

    Scene {
        physics: PhysicsWorld::new(PhysicsSettings::from_config(&config)),
        bounds: BoundsManager::new(config.bound_thickness),
        texts: TextBodies::new(),
        width,
        height,
        rng: SmallRng::seed_from_u64(seed),
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
        commands: Vec::with_capacity(64),
        config,
    }
}

/// Scatter `body_count` labels over the viewport, `spawn_margin` away from
/// the edges.
pub(super) fn populate<M>(scene: &mut Scene, measure: &M) -> Result<Vec<BodyHandle>, M::Error>
where
    M: TextMeasure + ?Sized,
{
    let margin = scene.config.spawn_margin;
    let count = scene.config.body_count as usize;
    let label = scene.config.label.clone();

    let mut handles = Vec::with_capacity(count);
    for _ in 0..count {
        let x = random_in_range(&mut scene.rng, margin, scene.width - margin);
        let y = random_in_range(&mut scene.rng, margin, scene.height - margin);
        handles.push(create_text_body(scene, measure, &label, x, y)?);
    }
    Ok(handles)
}

pub(super) fn create_text_body<M>(
    scene: &mut Scene,
    measure: &M,
    text: &str,
    x: f64,
    y: f64,
) -> Result<BodyHandle, M::Error>
where
    M: TextMeasure + ?Sized,
{
    let Scene { physics, texts, rng, config, .. } = scene;
    texts.create(physics, measure, rng, text, &config.font, x, y)
}
