use wasm_bindgen::prelude::*;

/// Timing of the last frame. Durations stay zero while metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) frame_ms: f64,
    pub(super) body_count: u32,
    pub(super) frames: u64,
}

impl FrameStats {
    pub(crate) fn reset_timings(&mut self) {
        self.step_ms = 0.0;
        self.render_ms = 0.0;
        self.frame_ms = 0.0;
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }
}
