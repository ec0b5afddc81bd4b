//! Precomputed pixel contribution tables
//!
//! For every target coordinate along one axis, the table holds the list
//! of contributing source coordinates with their kernel weights and the
//! sum of those weights. Building the table once per axis moves all
//! edge handling and weight evaluation out of the per-pixel filter
//! loops, and makes arbitrary filter phases for arbitrary scale ratios
//! a table lookup.
//!
//! Weight sums are intentionally NOT normalized to 1 here. Under
//! [`EdgeMethod::NoContrib`] kernels truncated at the image boundary
//! keep a partial sum, and dividing by the stored sum at apply time
//! averages correctly over whatever contributors remain.

use crate::kernel::{LANCZOS_TAPS, lanczos2};
use chromascale_core::{EdgeMethod, resolve_edge};

/// Contributors for one output coordinate
#[derive(Debug, Clone)]
struct ContribRow {
    /// `(source index, weight)` pairs in candidate order
    taps: Vec<(u32, f64)>,
    /// Sum of the appended weights
    weights_sum: f64,
}

/// Contribution table for one axis of one resize pass
///
/// Immutable after construction; built per pass and discarded with it.
#[derive(Debug, Clone)]
pub struct ContribTable {
    rows: Vec<ContribRow>,
}

impl ContribTable {
    /// Build the table for resampling `in_dim` source samples to
    /// `out_dim` target samples under the given edge policy.
    ///
    /// Upscaling (`out_dim >= in_dim`) evaluates the kernel unscaled
    /// with a half-support of [`LANCZOS_TAPS`]. Downscaling pre-scales
    /// the kernel input by the ratio and widens the half-support to
    /// `LANCZOS_TAPS / ratio`, widening the low-pass response to
    /// prevent aliasing.
    pub fn new(in_dim: u32, out_dim: u32, edge: EdgeMethod) -> Self {
        let scale_ratio = f64::from(out_dim) / f64::from(in_dim);

        let (filter_scale, half_support) = if scale_ratio >= 1.0 {
            (1.0, LANCZOS_TAPS)
        } else {
            (scale_ratio, LANCZOS_TAPS / scale_ratio)
        };
        let max_taps = (2.0 * half_support + 1.0) as usize;

        let mut rows = Vec::with_capacity(out_dim as usize);
        for i in 0..out_dim {
            // Filter center in source coordinates, for any scale ratio
            let center = (f64::from(i) + 0.5) / scale_ratio - 0.5;
            let left = (center - half_support).floor() as i64;
            let right = (center + half_support).ceil() as i64;

            let mut taps = Vec::with_capacity(max_taps);
            let mut weights_sum = 0.0;
            for j in left..=right {
                // NoContrib drops candidates outside the image instead
                // of remapping them
                if edge == EdgeMethod::NoContrib && (j < 0 || j > i64::from(in_dim)) {
                    continue;
                }

                let weight = lanczos2((center - j as f64) * filter_scale);
                if weight == 0.0 {
                    continue;
                }

                let src = resolve_edge(j, in_dim, edge);
                taps.push((src, weight));
                weights_sum += weight;
            }

            rows.push(ContribRow { taps, weights_sum });
        }

        ContribTable { rows }
    }

    /// Number of output coordinates covered by the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table covers no output coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Contributors for output coordinate `i`.
    #[inline]
    pub fn taps(&self, i: usize) -> &[(u32, f64)] {
        &self.rows[i].taps
    }

    /// Stored weight sum for output coordinate `i`.
    #[inline]
    pub fn weights_sum(&self, i: usize) -> f64 {
        self.rows[i].weights_sum
    }

    /// Filter one output sample: normalized weighted accumulation of
    /// the source samples produced by `fetch`, clamped to `[0, 1]`.
    #[inline]
    pub fn apply(&self, i: usize, mut fetch: impl FnMut(u32) -> f64) -> f64 {
        let row = &self.rows[i];
        let mut acc = 0.0;
        for &(src, weight) in &row.taps {
            acc += weight * fetch(src);
        }
        (acc / row.weights_sum).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_matches_appended_weights() {
        // The stored sum is exactly the sum of the appended weights
        for (in_dim, out_dim) in [(4, 8), (8, 4), (10, 10), (7, 3), (3, 7)] {
            for edge in [EdgeMethod::Repeat, EdgeMethod::Mirror, EdgeMethod::NoContrib] {
                let table = ContribTable::new(in_dim, out_dim, edge);
                assert_eq!(table.len(), out_dim as usize);
                for i in 0..table.len() {
                    let sum: f64 = table.taps(i).iter().fold(0.0, |s, &(_, w)| s + w);
                    assert_eq!(
                        sum,
                        table.weights_sum(i),
                        "{in_dim}->{out_dim} {edge:?} index {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sources_within_bounds() {
        for (in_dim, out_dim) in [(4, 8), (8, 4), (5, 2)] {
            for edge in [EdgeMethod::Repeat, EdgeMethod::Mirror, EdgeMethod::NoContrib] {
                let table = ContribTable::new(in_dim, out_dim, edge);
                for i in 0..table.len() {
                    for &(src, _) in table.taps(i) {
                        assert!(src < in_dim);
                    }
                }
            }
        }
    }

    #[test]
    fn test_upscale_support_is_two_taps() {
        // 2x upscale: candidates span center +/- 2, and the exact-zero
        // integer offsets are dropped
        let table = ContribTable::new(8, 16, EdgeMethod::Repeat);
        for i in 0..table.len() {
            assert!(table.taps(i).len() <= 5);
            assert!(!table.taps(i).is_empty());
        }
    }

    #[test]
    fn test_upscale_interior_weights_near_unity() {
        // Away from the edges an unscaled Lanczos partition sums close to 1
        let table = ContribTable::new(16, 32, EdgeMethod::Repeat);
        for i in 8..24 {
            assert!((table.weights_sum(i) - 1.0).abs() < 0.05, "index {i}");
        }
    }

    #[test]
    fn test_downscale_widens_support() {
        // Half ratio: half-support widens to 4, interior rows carry 8 taps
        let table = ContribTable::new(16, 8, EdgeMethod::Repeat);
        let mid = table.taps(4);
        assert_eq!(mid.len(), 8);
    }

    #[test]
    fn test_nocontrib_truncates_at_edges() {
        let repeat = ContribTable::new(4, 2, EdgeMethod::Repeat);
        let nocontrib = ContribTable::new(4, 2, EdgeMethod::NoContrib);
        // The edge output loses its out-of-image candidates
        assert!(nocontrib.taps(0).len() < repeat.taps(0).len());
        assert!(nocontrib.weights_sum(0) < repeat.weights_sum(0));
        for &(src, _) in nocontrib.taps(0) {
            assert!(src < 4);
        }
    }

    #[test]
    fn test_identity_ratio_single_tap() {
        // At ratio 1 each output is centered on its source sample, the
        // neighbors fall on the kernel's integer zeros
        let table = ContribTable::new(6, 6, EdgeMethod::Repeat);
        for i in 0..table.len() {
            assert_eq!(table.taps(i), &[(i as u32, 1.0)]);
        }
    }

    #[test]
    fn test_apply_normalizes_and_clamps() {
        let table = ContribTable::new(4, 2, EdgeMethod::Repeat);
        // Constant input stays constant under normalization
        let v = table.apply(0, |_| 0.25);
        assert!((v - 0.25).abs() < 1e-12);
        // Values beyond the ringing range clamp into [0, 1]
        let hi = table.apply(0, |_| 2.0);
        assert_eq!(hi, 1.0);
    }
}
