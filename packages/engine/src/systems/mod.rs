pub mod bounds;
pub mod orientation;
pub mod physics;
pub mod text_bodies;
