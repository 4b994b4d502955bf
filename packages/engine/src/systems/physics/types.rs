use rapier2d::prelude::RigidBodyHandle;

use crate::core::Vec2;
use crate::domain::config::DemoConfig;

/// Stable identity of a body for the lifetime of the world
pub type BodyHandle = RigidBodyHandle;

/// Engine construction parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsSettings {
    pub pixels_per_meter: f64,
    /// Acceleration (m/s²) applied for a unit gravity vector
    pub gravity_scale: f64,
    pub position_iterations: u32,
    pub constraint_iterations: u32,
}

impl PhysicsSettings {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            pixels_per_meter: config.pixels_per_meter,
            gravity_scale: config.gravity_scale,
            position_iterations: config.position_iterations,
            constraint_iterations: config.constraint_iterations,
        }
    }
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

/// Options for `PhysicsWorld::add_rectangle`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectOptions {
    /// Initial rotation (radians)
    pub angle: f64,
    pub is_static: bool,
}

impl RectOptions {
    pub fn fixed() -> Self {
        Self { angle: 0.0, is_static: true }
    }

    pub fn rotated(angle: f64) -> Self {
        Self { angle, is_static: false }
    }
}

/// World-space polygon of a rectangle body, in pixels.
///
/// Vertex order follows the untransformed rectangle: top-left, top-right,
/// bottom-right, bottom-left. Vertex 0 is where a label's top-left corner goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyOutline {
    pub vertices: [Vec2; 4],
    /// Rotation (radians)
    pub angle: f64,
    pub is_static: bool,
}
