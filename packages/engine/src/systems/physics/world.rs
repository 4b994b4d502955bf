use std::num::NonZeroUsize;

use rapier2d::prelude::*;

use crate::core::Vec2;
use crate::domain::orientation::GravityVector;

use super::pointer::PointerConstraint;
use super::types::{BodyHandle, BodyOutline, PhysicsSettings, RectOptions};

/// Contact friction for every collider, close to what canvas demos usually use
const BODY_FRICTION: Real = 0.1;

/// Rapier pipeline plus the bookkeeping the scene needs on top of it
pub struct PhysicsWorld {
    gravity: GravityVector,
    gravity_scale: f64,
    pixels_per_meter: f64,

    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,

    /// Insertion order, used as draw order
    order: Vec<BodyHandle>,
    pointer: PointerConstraint,
}

impl PhysicsWorld {
    pub fn new(settings: PhysicsSettings) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(settings.position_iterations as usize).unwrap_or(NonZeroUsize::MIN);
        integration_parameters.num_internal_pgs_iterations =
            (settings.constraint_iterations as usize).max(1);

        Self {
            gravity: GravityVector::default(),
            gravity_scale: settings.gravity_scale,
            pixels_per_meter: settings.pixels_per_meter,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            order: Vec::new(),
            pointer: PointerConstraint::default(),
        }
    }

    // === Unit conversion ===

    #[inline]
    fn to_meters(&self, px: f64) -> Real {
        (px / self.pixels_per_meter) as Real
    }

    #[inline]
    fn to_pixels(&self, m: Real) -> f64 {
        m as f64 * self.pixels_per_meter
    }

    #[inline]
    fn point_to_world(&self, p: Vec2) -> Point<Real> {
        point![self.to_meters(p.x), self.to_meters(p.y)]
    }

    #[inline]
    fn point_to_scene(&self, p: &Point<Real>) -> Vec2 {
        Vec2::new(self.to_pixels(p.x), self.to_pixels(p.y))
    }

    // === Bodies ===

    /// Add a rectangle centered at `center` (pixels).
    pub fn add_rectangle(&mut self, center: Vec2, width: f64, height: f64, options: RectOptions) -> BodyHandle {
        let builder = if options.is_static {
            RigidBodyBuilder::fixed()
        } else {
            // Never asleep: a resting body must still answer the next tilt.
            RigidBodyBuilder::dynamic().ccd_enabled(true).can_sleep(false)
        };
        let body = builder
            .translation(vector![self.to_meters(center.x), self.to_meters(center.y)])
            .rotation(options.angle as Real)
            .build();
        let collider = ColliderBuilder::cuboid(self.to_meters(width / 2.0), self.to_meters(height / 2.0))
            .friction(BODY_FRICTION)
            .build();

        let handle = self.bodies.insert(body);
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        self.order.push(handle);
        handle
    }

    /// Teleport a body's center to `center` (pixels). Rotation is untouched.
    pub fn set_position(&mut self, handle: BodyHandle, center: Vec2) {
        let translation = vector![self.to_meters(center.x), self.to_meters(center.y)];
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(translation, true);
        }
    }

    /// Replace the rectangle extents of a body (pixels).
    pub fn set_size(&mut self, handle: BodyHandle, width: f64, height: f64) {
        let (hx, hy) = (self.to_meters(width / 2.0), self.to_meters(height / 2.0));
        let Some(body) = self.bodies.get(handle) else {
            return;
        };
        let Some(&collider) = body.colliders().first() else {
            return;
        };
        if let Some(collider) = self.colliders.get_mut(collider) {
            collider.set_shape(SharedShape::cuboid(hx, hy));
        }
    }

    /// Center of a body (pixels)
    pub fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        let body = self.bodies.get(handle)?;
        let t = body.translation();
        Some(Vec2::new(self.to_pixels(t.x), self.to_pixels(t.y)))
    }

    /// Rotation of a body (radians)
    pub fn angle(&self, handle: BodyHandle) -> Option<f64> {
        self.bodies.get(handle).map(|b| b.rotation().angle() as f64)
    }

    /// Untransformed rectangle size (pixels)
    pub fn size(&self, handle: BodyHandle) -> Option<(f64, f64)> {
        let body = self.bodies.get(handle)?;
        let collider = self.colliders.get(*body.colliders().first()?)?;
        let cuboid = collider.shape().as_cuboid()?;
        Some((
            self.to_pixels(cuboid.half_extents.x) * 2.0,
            self.to_pixels(cuboid.half_extents.y) * 2.0,
        ))
    }

    /// Current world-space polygon of a rectangle body.
    pub fn outline(&self, handle: BodyHandle) -> Option<BodyOutline> {
        let body = self.bodies.get(handle)?;
        let collider = self.colliders.get(*body.colliders().first()?)?;
        let he = collider.shape().as_cuboid()?.half_extents;
        let pose = body.position();

        let corners = [
            point![-he.x, -he.y],
            point![he.x, -he.y],
            point![he.x, he.y],
            point![-he.x, he.y],
        ];
        let vertices = corners.map(|c| self.point_to_scene(&(pose * c)));

        Some(BodyOutline {
            vertices,
            angle: body.rotation().angle() as f64,
            is_static: body.is_fixed(),
        })
    }

    /// All bodies in insertion order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.order
    }

    pub fn body_count(&self) -> usize {
        self.order.len()
    }

    // === Gravity ===

    pub fn set_gravity(&mut self, gravity: GravityVector) {
        self.gravity = gravity;
    }

    pub fn gravity(&self) -> GravityVector {
        self.gravity
    }

    // === Pointer constraint ===

    /// Press at `at` (pixels). Grabs the dynamic body under the pointer, if any.
    pub fn pointer_down(&mut self, at: Vec2) -> Option<BodyHandle> {
        let point = self.point_to_world(at);

        let mut hit = None;
        self.query_pipeline.intersections_with_point(
            &self.bodies,
            &self.colliders,
            &point,
            QueryFilter::only_dynamic(),
            |collider| {
                hit = Some(collider);
                false
            },
        );

        let body = hit
            .and_then(|c| self.colliders.get(c))
            .and_then(|c| c.parent())
            .and_then(|h| self.bodies.get(h).map(|rb| (h, rb)));
        self.pointer.press(point, body);
        self.pointer.grabbed()
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        let point = self.point_to_world(at);
        self.pointer.drag(point);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    pub fn grabbed(&self) -> Option<BodyHandle> {
        self.pointer.grabbed()
    }

    // === Stepping ===

    /// Advance one fixed step (1/60 s).
    pub fn step(&mut self) {
        let gravity = vector![
            (self.gravity.x * self.gravity_scale) as Real,
            (self.gravity.y * self.gravity_scale) as Real
        ];

        self.pointer.apply(&mut self.bodies, self.integration_parameters.dt);

        self.pipeline.step(
            &gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }
}
