//! Text bodies: rigid rectangles sized to a label's visible ink.
//!
//! The physics world knows nothing about labels. Which bodies are text, and
//! what they say, lives in `TextBodies`, keyed by body handle and read fresh
//! every frame.

use std::collections::HashMap;
use std::f64::consts::FRAC_PI_4;

use rand::Rng;

use crate::core::{random_in_range, Vec2};
use crate::domain::font::FontDescriptor;
use crate::systems::physics::{BodyHandle, PhysicsWorld, RectOptions};

/// Smallest collider edge; empty labels still get a usable body.
pub const MIN_TEXT_EXTENT: f64 = 1.0;

/// Rendered glyph extents of a string, relative to the text origin.
///
/// Same meaning as the canvas `TextMetrics.actualBoundingBox*` values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub left: f64,
    pub right: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextExtents {
    /// Tight box around the ink, never smaller than `MIN_TEXT_EXTENT`.
    pub fn size(&self) -> (f64, f64) {
        let width = self.left.abs() + self.right.abs();
        let height = self.ascent.abs() + self.descent.abs();
        (atleast_min(width), atleast_min(height))
    }
}

#[inline]
fn atleast_min(v: f64) -> f64 {
    if v.is_finite() { v.max(MIN_TEXT_EXTENT) } else { MIN_TEXT_EXTENT }
}

/// Source of glyph metrics (a canvas context in the browser)
pub trait TextMeasure {
    type Error;

    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtents, Self::Error>;
}

/// What to draw on top of a text body
#[derive(Clone, Debug, PartialEq)]
pub struct TextTag {
    pub label: String,
    pub font: FontDescriptor,
}

/// Uniform angle in `[-π/4, π/4]`
pub fn random_tilt<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    random_in_range(rng, -FRAC_PI_4, FRAC_PI_4)
}

/// Side table of text bodies
#[derive(Default)]
pub struct TextBodies {
    tags: HashMap<BodyHandle, TextTag>,
}

impl TextBodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure `text`, add a matching rectangle centered at `(x, y)` with a
    /// random tilt, and tag it.
    pub fn create<M, R>(
        &mut self,
        physics: &mut PhysicsWorld,
        measure: &M,
        rng: &mut R,
        text: &str,
        font: &FontDescriptor,
        x: f64,
        y: f64,
    ) -> Result<BodyHandle, M::Error>
    where
        M: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        let (width, height) = measure.measure(text, font)?.size();
        let angle = random_tilt(rng);

        let handle = physics.add_rectangle(Vec2::new(x, y), width, height, RectOptions::rotated(angle));
        self.tags.insert(
            handle,
            TextTag {
                label: text.to_string(),
                font: font.clone(),
            },
        );
        Ok(handle)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&TextTag> {
        self.tags.get(&handle)
    }

    pub fn is_text(&self, handle: BodyHandle) -> bool {
        self.tags.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::PhysicsSettings;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::convert::Infallible;

    /// Monospace-ish metrics: 0.6em per char, ascent 0.7em, descent 0.2em
    struct FixedMetrics;

    impl TextMeasure for FixedMetrics {
        type Error = Infallible;

        fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtents, Infallible> {
            let advance = text.chars().count() as f64 * font.size * 0.6;
            Ok(TextExtents {
                left: 0.0,
                right: advance,
                ascent: font.size * 0.7,
                descent: font.size * 0.2,
            })
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn extents_use_absolute_overhangs() {
        let e = TextExtents { left: -3.0, right: 97.0, ascent: 36.0, descent: -2.0 };
        assert_eq!(e.size(), (100.0, 38.0));
    }

    #[test]
    fn empty_extents_clamp_to_one_pixel() {
        assert_eq!(TextExtents::default().size(), (1.0, 1.0));
        let e = TextExtents { left: f64::NAN, right: 0.0, ascent: 0.0, descent: 0.0 };
        assert_eq!(e.size(), (1.0, 1.0));
    }

    #[test]
    fn body_matches_measured_ink() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut texts = TextBodies::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let font = FontDescriptor::default();

        let h = texts
            .create(&mut physics, &FixedMetrics, &mut rng, "Hello World", &font, 300.0, 300.0)
            .unwrap();

        let (w, hgt) = physics.size(h).unwrap();
        assert!(close(w, 11.0 * 50.0 * 0.6));
        assert!(close(hgt, 50.0 * 0.9));
        let center = physics.position(h).unwrap();
        assert!(close(center.x, 300.0) && close(center.y, 300.0));

        let tag = texts.get(h).unwrap();
        assert_eq!(tag.label, "Hello World");
        assert_eq!(tag.font, font);
    }

    #[test]
    fn empty_label_gets_minimum_body() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut texts = TextBodies::new();
        let mut rng = SmallRng::seed_from_u64(2);

        let h = texts
            .create(&mut physics, &FixedMetrics, &mut rng, "", &FontDescriptor::default(), 10.0, 10.0)
            .unwrap();
        let (w, _) = physics.size(h).unwrap();
        assert!(close(w, 1.0));
        assert!(texts.is_text(h));
    }

    #[test]
    fn tilt_is_bounded_and_spread() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut buckets = [0u32; 4];
        let n = 4000;
        let mut sum = 0.0;
        for _ in 0..n {
            let a = random_tilt(&mut rng);
            assert!((-FRAC_PI_4..=FRAC_PI_4).contains(&a));
            sum += a;
            let idx = (((a + FRAC_PI_4) / (FRAC_PI_4 / 2.0)) as usize).min(3);
            buckets[idx] += 1;
        }
        // roughly uniform: each quarter near n/4, mean near zero
        for count in buckets {
            assert!(count > 800 && count < 1200, "bucket count {}", count);
        }
        assert!((sum / n as f64).abs() < 0.05);
    }

    #[test]
    fn created_bodies_start_tilted_within_range() {
        let mut physics = PhysicsWorld::new(PhysicsSettings::default());
        let mut texts = TextBodies::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let font = FontDescriptor::default();

        for i in 0..50 {
            let h = texts
                .create(&mut physics, &FixedMetrics, &mut rng, "tilt", &font, i as f64 * 400.0, 0.0)
                .unwrap();
            let angle = physics.angle(h).unwrap();
            assert!(angle.abs() <= FRAC_PI_4 + 1e-6);
        }
        assert_eq!(texts.len(), 50);
    }
}
