use rapier2d::prelude::*;

/// Fraction of the anchor-to-pointer distance closed per step
const POINTER_STIFFNESS: Real = 0.2;

struct Grab {
    body: RigidBodyHandle,
    /// Grab point in body-local coordinates
    local_anchor: Point<Real>,
}

/// Spring between the pointer and the point where a body was grabbed
#[derive(Default)]
pub(super) struct PointerConstraint {
    target: Option<Point<Real>>,
    grab: Option<Grab>,
}

impl PointerConstraint {
    pub(super) fn press(&mut self, at: Point<Real>, hit: Option<(RigidBodyHandle, &RigidBody)>) {
        self.target = Some(at);
        self.grab = hit.map(|(body, rb)| Grab {
            body,
            local_anchor: rb.position().inverse_transform_point(&at),
        });
    }

    pub(super) fn drag(&mut self, at: Point<Real>) {
        self.target = Some(at);
    }

    pub(super) fn release(&mut self) {
        self.target = None;
        self.grab = None;
    }

    pub(super) fn grabbed(&self) -> Option<RigidBodyHandle> {
        self.grab.as_ref().map(|g| g.body)
    }

    /// Push the grabbed body toward the pointer before a step.
    pub(super) fn apply(&self, bodies: &mut RigidBodySet, dt: Real) {
        let (Some(grab), Some(target)) = (self.grab.as_ref(), self.target) else {
            return;
        };
        let Some(body) = bodies.get_mut(grab.body) else {
            return;
        };
        if dt <= 0.0 {
            return;
        }

        let anchor = body.position() * grab.local_anchor;
        let desired = (target - anchor) * (POINTER_STIFFNESS / dt);
        let current = body.velocity_at_point(&anchor);
        let impulse = (desired - current) * body.mass();
        body.apply_impulse_at_point(impulse, anchor, true);
    }
}
