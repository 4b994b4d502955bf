/// Milliseconds on a monotonic-enough clock (`Date.now()` in the browser).
#[cfg(target_arch = "wasm32")]
fn now_ms(_origin: &Origin) -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms(origin: &Origin) -> f64 {
    origin.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
type Origin = ();
#[cfg(not(target_arch = "wasm32"))]
type Origin = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn origin() -> Origin {}
#[cfg(not(target_arch = "wasm32"))]
fn origin() -> Origin {
    std::time::Instant::now()
}

struct Marks {
    origin: Origin,
    start: f64,
    lap: f64,
}

/// Lap stopwatch for one frame. Disabled timers read zero everywhere and
/// never touch the clock.
pub(crate) struct PerfTimer {
    marks: Option<Marks>,
}

impl PerfTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        let marks = enabled.then(|| {
            let origin = origin();
            let now = now_ms(&origin);
            Marks { origin, start: now, lap: now }
        });
        Self { marks }
    }

    /// Time since the previous lap (or the start), then begin a new lap.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let Some(marks) = self.marks.as_mut() else {
            return 0.0;
        };
        let now = now_ms(&marks.origin);
        let elapsed = now - marks.lap;
        marks.lap = now;
        elapsed
    }

    /// Begin a new lap without reporting the time spent since the last one.
    pub(crate) fn skip_lap(&mut self) {
        self.lap_ms();
    }

    pub(crate) fn total_ms(&self) -> f64 {
        self.marks
            .as_ref()
            .map(|m| now_ms(&m.origin) - m.start)
            .unwrap_or(0.0)
    }
}
