//! Boundary walls around the viewport
//!
//! Four static rectangles whose inner edges sit on the viewport edges. They
//! are created once and only moved/resized afterwards, addressed by position
//! in `walls`: left, top, right, bottom.

use crate::core::Vec2;
use crate::systems::physics::{BodyHandle, PhysicsWorld, RectOptions};

pub const WALL_LEFT: usize = 0;
pub const WALL_TOP: usize = 1;
pub const WALL_RIGHT: usize = 2;
pub const WALL_BOTTOM: usize = 3;

/// Center and size of one wall, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
}

/// Wall rectangles for a viewport, ordered left, top, right, bottom.
pub fn wall_layout(thickness: f64, width: f64, height: f64) -> [WallRect; 4] {
    let half = thickness / 2.0;
    [
        WallRect { center: Vec2::new(-half, height / 2.0), width: thickness, height },
        WallRect { center: Vec2::new(width / 2.0, -half), width, height: thickness },
        WallRect { center: Vec2::new(width + half, height / 2.0), width: thickness, height },
        WallRect { center: Vec2::new(width / 2.0, height + half), width, height: thickness },
    ]
}

pub struct BoundsManager {
    thickness: f64,
    walls: Vec<BodyHandle>,
}

impl BoundsManager {
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            walls: Vec::with_capacity(4),
        }
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn is_created(&self) -> bool {
        !self.walls.is_empty()
    }

    /// Wall handles: left, top, right, bottom (empty before `create`)
    pub fn walls(&self) -> &[BodyHandle] {
        &self.walls
    }

    /// Add the four walls to the world.
    ///
    /// A second call only re-fits the existing walls.
    pub fn create(&mut self, physics: &mut PhysicsWorld, width: f64, height: f64) {
        if self.is_created() {
            self.update(physics, width, height);
            return;
        }

        for wall in wall_layout(self.thickness, width, height) {
            let handle = physics.add_rectangle(wall.center, wall.width, wall.height, RectOptions::fixed());
            self.walls.push(handle);
        }
    }

    /// Move the existing walls onto the viewport edges. No-op before `create`.
    ///
    /// Top and bottom walls are also stretched to the new width (left/right to
    /// the new height) so corners stay sealed when the viewport grows.
    pub fn update(&mut self, physics: &mut PhysicsWorld, width: f64, height: f64) {
        if !self.is_created() {
            return;
        }

        for (&handle, wall) in self.walls.iter().zip(wall_layout(self.thickness, width, height)) {
            physics.set_position(handle, wall.center);
            physics.set_size(handle, wall.width, wall.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::PhysicsSettings;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn layout_puts_inner_edges_on_viewport() {
        let [left, top, right, bottom] = wall_layout(100.0, 800.0, 600.0);
        assert_eq!(left.center, Vec2::new(-50.0, 300.0));
        assert_eq!(top.center, Vec2::new(400.0, -50.0));
        assert_eq!(right.center, Vec2::new(850.0, 300.0));
        assert_eq!(bottom.center, Vec2::new(400.0, 650.0));

        // inner edges
        assert_eq!(left.center.x + left.width / 2.0, 0.0);
        assert_eq!(top.center.y + top.height / 2.0, 0.0);
        assert_eq!(right.center.x - right.width / 2.0, 800.0);
        assert_eq!(bottom.center.y - bottom.height / 2.0, 600.0);
    }

    #[test]
    fn update_before_create_is_noop() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut bounds = BoundsManager::new(100.0);
        bounds.update(&mut physics, 800.0, 600.0);
        assert!(!bounds.is_created());
        assert_eq!(physics.body_count(), 0);
    }

    #[test]
    fn create_twice_keeps_four_walls() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut bounds = BoundsManager::new(100.0);
        bounds.create(&mut physics, 800.0, 600.0);
        bounds.create(&mut physics, 1024.0, 768.0);

        assert_eq!(bounds.walls().len(), 4);
        assert_eq!(physics.body_count(), 4);
        let right = physics.position(bounds.walls()[WALL_RIGHT]).unwrap();
        assert!(close(right.x, 1074.0));
    }

    #[test]
    fn update_refits_walls_in_place() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut bounds = BoundsManager::new(100.0);
        bounds.create(&mut physics, 800.0, 600.0);
        let before = bounds.walls().to_vec();

        bounds.update(&mut physics, 1200.0, 400.0);

        assert_eq!(bounds.walls(), &before[..]);
        let bottom = bounds.walls()[WALL_BOTTOM];
        let p = physics.position(bottom).unwrap();
        assert!(close(p.x, 600.0) && close(p.y, 450.0));
        let (w, h) = physics.size(bottom).unwrap();
        assert!(close(w, 1200.0) && close(h, 100.0));

        let left = physics.size(bounds.walls()[WALL_LEFT]).unwrap();
        assert!(close(left.0, 100.0) && close(left.1, 400.0));
    }
}
