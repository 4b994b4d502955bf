//! Physics System - rigid bodies on top of rapier2d
//!
//! The scene works in canvas pixels (y grows downward). Rapier works in
//! meters, so every coordinate crossing this boundary is scaled by
//! `pixels_per_meter`. Nothing outside this module touches rapier types
//! except `BodyHandle`.
//!
//! Exposed primitives:
//! - create the engine with solver iteration counts
//! - add rectangle bodies (static or dynamic, with an initial angle)
//! - move / resize a body
//! - step with the current gravity
//! - read a body's outline and angle for drawing
//! - a pointer constraint for dragging bodies around

mod pointer;
mod types;
mod world;

pub use types::{BodyHandle, BodyOutline, PhysicsSettings, RectOptions};
pub use world::PhysicsWorld;
