//! Regression test parameters and comparisons

use chromascale_core::Image;

/// Regression test state: indexed comparisons with a failure ledger
///
/// Each comparison bumps the index so a failing check can be found by
/// number in the test output. [`RegParams::cleanup`] reports the final
/// verdict and returns it for the test's closing `assert!`.
pub struct RegParams {
    /// Name of the test (e.g. "resize")
    pub test_name: String,
    /// Current comparison index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create regression test parameters for the named test.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two fixed8 images sample by sample within `delta` code
    /// values. Dimension, color-space, or precision differences fail
    /// immediately.
    pub fn compare_images(&mut self, img1: &Image, img2: &Image, delta: u8) -> bool {
        self.index += 1;

        if img1.dimensions() != img2.dimensions()
            || img1.color_space() != img2.color_space()
            || img1.precision() != img2.precision()
        {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - shape mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for plane in 0..3 {
            let (pw, ph) = img1.plane_dimensions(plane);
            for y in 0..ph {
                for x in 0..pw {
                    let a = img1.plane_8(plane, x, y);
                    let b = img2.plane_8(plane, x, y);
                    if (a as i32 - b as i32).unsigned_abs() > u32::from(delta) {
                        let msg = format!(
                            "Failure in {}_reg: image comparison for index {} - \
                             plane {} ({}, {}): {} vs {}",
                            self.test_name, self.index, plane, x, y, a, b
                        );
                        eprintln!("{}", msg);
                        self.failures.push(msg);
                        self.success = false;
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Record an arbitrary pass/fail check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check for index {}: {}",
                self.test_name, self.index, what
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Report results and return the overall verdict.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_index_advances() {
        let mut rp = RegParams::new("test");
        rp.compare_values(1.0, 1.0, 0.0);
        rp.check(true, "noop");
        assert_eq!(rp.index(), 2);
    }
}
