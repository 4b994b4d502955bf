//! Core helpers shared by every layer: console logging macros, numeric
//! utilities and the pixel-space vector type.

#[macro_use]
pub mod utils;
pub mod math;
pub mod vec2;

pub use math::{clamp, random_in_range};
pub use vec2::Vec2;
