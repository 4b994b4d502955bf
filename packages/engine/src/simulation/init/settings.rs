use crate::domain::orientation::GravityVector;

use super::frame_stats::FrameStats;
use super::Scene;

pub(super) fn enable_perf_metrics(scene: &mut Scene, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset_timings();
    }
}

pub(super) fn get_frame_stats(scene: &Scene) -> FrameStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut Scene, gravity: GravityVector) {
    scene.physics.set_gravity(gravity);
}

pub(super) fn get_gravity(scene: &Scene) -> GravityVector {
    scene.physics.gravity()
}

pub(super) fn set_debug_overlay(scene: &mut Scene, enabled: bool) {
    scene.config.debug_overlay = enabled;
}
