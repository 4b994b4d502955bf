//! Device tilt readings and the gravity they produce.

use crate::core::clamp;

/// Beta reported when the axis is missing: device held upright.
pub const DEFAULT_BETA: f64 = 90.0;
pub const DEFAULT_ALPHA: f64 = 0.0;
pub const DEFAULT_GAMMA: f64 = 0.0;

/// Degrees of tilt that map to full gravity on one axis.
const FULL_TILT_DEG: f64 = 90.0;

/// One `deviceorientation` sample, in degrees.
///
/// Browsers report `null` for axes they cannot measure, so every axis is
/// optional; the accessors substitute the defaults above.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationReading {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl OrientationReading {
    pub fn new(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Reading with every axis present
    pub fn degrees(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::new(Some(alpha), Some(beta), Some(gamma))
    }

    pub fn alpha_or_default(&self) -> f64 {
        axis_or(self.alpha, DEFAULT_ALPHA)
    }

    pub fn beta_or_default(&self) -> f64 {
        axis_or(self.beta, DEFAULT_BETA)
    }

    pub fn gamma_or_default(&self) -> f64 {
        axis_or(self.gamma, DEFAULT_GAMMA)
    }
}

#[inline]
fn axis_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Unitless gravity direction, each component in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityVector {
    pub x: f64,
    pub y: f64,
}

impl GravityVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for GravityVector {
    /// Straight down
    fn default() -> Self {
        Self { x: 0.0, y: 1.0 }
    }
}

/// Map a tilt reading to gravity: gamma steers x, beta steers y.
pub fn map_orientation_to_gravity(reading: &OrientationReading) -> GravityVector {
    GravityVector {
        x: clamp(reading.gamma_or_default() / FULL_TILT_DEG, -1.0, 1.0),
        y: clamp(reading.beta_or_default() / FULL_TILT_DEG, -1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_device_pulls_straight_down() {
        let g = map_orientation_to_gravity(&OrientationReading::degrees(0.0, 90.0, 0.0));
        assert_eq!(g, GravityVector::new(0.0, 1.0));
    }

    #[test]
    fn extreme_tilt_clamps_to_unit() {
        let g = map_orientation_to_gravity(&OrientationReading::degrees(0.0, 180.0, 90.0));
        assert_eq!(g, GravityVector::new(1.0, 1.0));

        let g = map_orientation_to_gravity(&OrientationReading::degrees(0.0, -180.0, -90.0));
        assert_eq!(g, GravityVector::new(-1.0, -1.0));
    }

    #[test]
    fn missing_axes_use_defaults() {
        let g = map_orientation_to_gravity(&OrientationReading::default());
        assert_eq!(g, GravityVector::new(0.0, 1.0));

        let g = map_orientation_to_gravity(&OrientationReading::new(Some(12.0), None, Some(45.0)));
        assert_eq!(g, GravityVector::new(0.5, 1.0));
    }

    #[test]
    fn zero_beta_is_a_real_reading() {
        // A device lying flat reports beta = 0; that is not a missing axis.
        let g = map_orientation_to_gravity(&OrientationReading::degrees(0.0, 0.0, 0.0));
        assert_eq!(g, GravityVector::new(0.0, 0.0));
    }

    #[test]
    fn non_finite_axes_fall_back_to_defaults() {
        let g = map_orientation_to_gravity(&OrientationReading::degrees(f64::NAN, f64::NAN, f64::INFINITY));
        assert_eq!(g, GravityVector::new(0.0, 1.0));
    }

    #[test]
    fn output_stays_in_unit_square() {
        let mut beta = -360.0;
        while beta <= 360.0 {
            let mut gamma = -360.0;
            while gamma <= 360.0 {
                let g = map_orientation_to_gravity(&OrientationReading::degrees(0.0, beta, gamma));
                assert!((-1.0..=1.0).contains(&g.x));
                assert!((-1.0..=1.0).contains(&g.y));
                gamma += 15.0;
            }
            beta += 15.0;
        }
    }
}
