use rand::Rng;

/// Clamp `value` into `[min, max]`.
///
/// Same shape as `Math.min(Math.max(v, lo), hi)`: never panics, even when the
/// bounds are inverted (the upper bound wins).
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Uniform sample in `[min, max)`.
///
/// Inverted ranges are allowed and sample `(max, min]`; spawning on a
/// viewport narrower than twice the spawn margin relies on this.
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert_eq!(clamp(-1.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(1.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_pins_out_of_range_values() {
        assert_eq!(clamp(2.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-7.5, -1.0, 1.0), -1.0);
        assert_eq!(clamp(f64::INFINITY, -1.0, 1.0), 1.0);
        assert_eq!(clamp(f64::NEG_INFINITY, -1.0, 1.0), -1.0);
    }

    #[test]
    fn clamp_is_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        let mut v = -5.0;
        while v <= 5.0 {
            let c = clamp(v, -1.0, 1.0);
            assert!(c >= prev);
            assert!((-1.0..=1.0).contains(&c));
            prev = c;
            v += 0.125;
        }
    }

    #[test]
    fn random_in_range_handles_inverted_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = random_in_range(&mut rng, 200.0, 100.0);
            assert!(v > 100.0 && v <= 200.0);
            let w = random_in_range(&mut rng, -3.0, 3.0);
            assert!((-3.0..3.0).contains(&w));
        }
    }
}
