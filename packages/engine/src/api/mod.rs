//! Browser glue: DOM, canvas, sensors and the animation-frame loop.
//!
//! Everything here calls into `web-sys` and only works inside a browser; the
//! logic it drives lives in `simulation` and `systems`.

pub mod canvas;
pub mod frame_loop;
pub mod listener;
pub mod sensor;
pub mod wasm;
