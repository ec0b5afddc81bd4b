//! The Lanczos-2 resampling kernel
//!
//! A windowed sinc with two lobes on each side of center: sharp
//! reconstruction with controlled ringing. The window is the sinc
//! itself stretched over the support.

use std::f64::consts::PI;

/// One-sided support of the kernel, in taps
pub const LANCZOS_TAPS: f64 = 2.0;

/// Below this magnitude, sinc switches to its series expansion and
/// kernel weights are snapped to exactly zero.
pub(crate) const EPSILON: f64 = 0.0000125;

/// `sin(pi*x) / (pi*x)`.
///
/// Near zero the quotient cancels catastrophically, so a short Taylor
/// series is used instead: `1 + u^2(-1/6 + u^2/120)` with `u = pi*x`.
pub fn sinc(x: f64) -> f64 {
    let x = x * PI;

    if x < EPSILON && x > -EPSILON {
        return 1.0 + x * x * (-1.0 / 6.0 + x * x / 120.0);
    }

    x.sin() / x
}

/// Snap values below `thresh` in magnitude to exactly zero.
fn abs_thresh(x: f64, thresh: f64) -> f64 {
    if x.abs() < thresh { 0.0 } else { x }
}

/// Kernel weight at offset `t` from the filter center.
///
/// `sinc(t) * sinc(t/2)` inside the two-lobe support, zero outside.
/// Weights that only differ from zero by floating-point noise (the
/// integer offsets, where sin(pi*t) does not cancel exactly) are
/// thresholded to exactly zero so they can be dropped from
/// contribution lists.
pub fn lanczos2(t: f64) -> f64 {
    let t = t.abs();

    if t < LANCZOS_TAPS {
        abs_thresh(sinc(t) * sinc(t / LANCZOS_TAPS), EPSILON)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_at_center() {
        assert_eq!(lanczos2(0.0), 1.0);
    }

    #[test]
    fn test_zero_at_nonzero_integers() {
        for t in [-1.0, 1.0] {
            assert_eq!(lanczos2(t), 0.0, "expected exact zero at t={t}");
        }
        for t in [-3.0, -2.0, 2.0, 3.0] {
            assert_eq!(lanczos2(t), 0.0);
        }
    }

    #[test]
    fn test_zero_outside_support() {
        assert_eq!(lanczos2(2.0), 0.0);
        assert_eq!(lanczos2(2.5), 0.0);
        assert_eq!(lanczos2(-10.0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        for t in [0.25, 0.5, 0.75, 1.3, 1.9] {
            assert_eq!(lanczos2(t), lanczos2(-t));
        }
    }

    #[test]
    fn test_lobe_signs() {
        // Main lobe positive, side lobe negative
        assert!(lanczos2(0.5) > 0.0);
        assert!(lanczos2(1.5) < 0.0);
    }

    #[test]
    fn test_sinc_series_matches_quotient() {
        // Just outside the series cutoff the two formulations agree
        let x = 5e-6;
        let series = 1.0 + (PI * x) * (PI * x) * (-1.0 / 6.0);
        assert!((sinc(x) - series).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // lanczos2(0.5) = sinc(0.5) * sinc(0.25)
        let expected = (2.0 / PI) * (0.25f64 * PI).sin() / (0.25 * PI);
        assert!((lanczos2(0.5) - expected).abs() < 1e-12);
    }
}
