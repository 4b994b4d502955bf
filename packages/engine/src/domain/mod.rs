pub mod config;
pub mod font;
pub mod orientation;
