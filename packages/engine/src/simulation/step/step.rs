use crate::domain::orientation::{map_orientation_to_gravity, OrientationReading};

use super::render_extract::{extract_bodies, extract_overlay};
use super::{PerfTimer, Scene};

/// One display frame: physics step, gravity from the latest tilt, then the
/// display list. Gravity set here feeds the *next* physics step.
pub(super) fn frame(scene: &mut Scene, reading: Option<&OrientationReading>) {
    let perf_on = scene.perf_enabled;
    let mut timer = PerfTimer::start_if(perf_on);

    step(scene);
    let step_ms = timer.lap_ms();

    update_gravity(scene, reading);
    timer.skip_lap();

    render(scene, reading);
    let render_ms = timer.lap_ms();

    if perf_on {
        scene.perf_stats.step_ms = step_ms;
        scene.perf_stats.render_ms = render_ms;
        scene.perf_stats.frame_ms = timer.total_ms();
    }
    scene.perf_stats.body_count = scene.physics.body_count() as u32;
    scene.perf_stats.frames = scene.frame;
}

pub(super) fn step(scene: &mut Scene) {
    scene.physics.step();
    scene.frame += 1;
}

/// Without a reading the current gravity is kept (straight down until the
/// first tilt event arrives).
pub(super) fn update_gravity(scene: &mut Scene, reading: Option<&OrientationReading>) {
    if let Some(reading) = reading {
        scene.physics.set_gravity(map_orientation_to_gravity(reading));
    }
}

pub(super) fn render(scene: &mut Scene, reading: Option<&OrientationReading>) {
    scene.commands.clear();
    extract_bodies(scene);
    if scene.config.debug_overlay {
        extract_overlay(scene, reading);
    }
}
