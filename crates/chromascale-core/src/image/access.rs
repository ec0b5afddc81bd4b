//! Pixel and sample access
//!
//! Two coordinate frames exist:
//!
//! - **Luma-frame** accessors (`sample8`, `pixelf`, ...) take (row, col)
//!   in plane-0 coordinates. Reads resolve out-of-range coordinates
//!   through an [`EdgeMethod`]; writes silently no-op when the target is
//!   out of bounds, since writes are always driven by valid loop bounds.
//!   Chroma-plane addresses are divided down by the subsampling factors
//!   before the lookup.
//! - **Plane-frame** accessors (`plane_8`, `plane_f`, ...) take
//!   coordinates directly in the target plane's own grid with no edge
//!   handling and no division. The separable filter loops use these,
//!   since they already walk each plane over its own dimensions.
//!
//! The two sample precisions get separate, explicitly named accessor
//! families rather than a single dispatching one; an operation always
//! knows its precision after validating its arguments.

use super::Image;
use crate::edge::{EdgeMethod, resolve_edge};

impl Image {
    /// Index into the plane store for a luma-frame coordinate,
    /// dividing chroma-plane addresses down by the subsampling factors.
    #[inline]
    fn sample_index(&self, plane: usize, x: u32, y: u32) -> usize {
        let (mut x, mut y) = (x, y);
        if plane > 0 {
            let (sub_x, sub_y) = self.color_space().chroma_subsampling();
            x /= sub_x;
            y /= sub_y;
        }
        plane * self.plane_len() + (y as usize) * (self.width() as usize) + (x as usize)
    }

    /// Index for a coordinate already in the target plane's own grid.
    #[inline]
    fn plane_index(&self, plane: usize, x: u32, y: u32) -> usize {
        plane * self.plane_len() + (y as usize) * (self.width() as usize) + (x as usize)
    }

    // ------------------------------------------------------------------
    // Luma-frame accessors
    // ------------------------------------------------------------------

    /// Get one 8-bit sample at a luma-frame coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the image holds double samples.
    pub fn sample8(&self, plane: usize, row: i64, col: i64, edge: EdgeMethod) -> u8 {
        let x = resolve_edge(col, self.width(), edge);
        let y = resolve_edge(row, self.height(), edge);
        self.planes8()[self.sample_index(plane, x, y)]
    }

    /// Get one double sample at a luma-frame coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the image holds fixed8 samples.
    pub fn samplef(&self, plane: usize, row: i64, col: i64, edge: EdgeMethod) -> f64 {
        let x = resolve_edge(col, self.width(), edge);
        let y = resolve_edge(row, self.height(), edge);
        self.planesf()[self.sample_index(plane, x, y)]
    }

    /// Set one 8-bit sample at a luma-frame coordinate.
    ///
    /// Out-of-bounds targets are silently ignored.
    pub fn set_sample8(&mut self, plane: usize, row: i64, col: i64, val: u8) {
        if row < 0 || col < 0 || row >= i64::from(self.height()) || col >= i64::from(self.width())
        {
            return;
        }
        let idx = self.sample_index(plane, col as u32, row as u32);
        self.planes8_mut()[idx] = val;
    }

    /// Set one double sample at a luma-frame coordinate.
    ///
    /// Out-of-bounds targets are silently ignored.
    pub fn set_samplef(&mut self, plane: usize, row: i64, col: i64, val: f64) {
        if row < 0 || col < 0 || row >= i64::from(self.height()) || col >= i64::from(self.width())
        {
            return;
        }
        let idx = self.sample_index(plane, col as u32, row as u32);
        self.planesf_mut()[idx] = val;
    }

    /// Get a full 3-sample 8-bit pixel at a luma-frame coordinate.
    pub fn pixel8(&self, row: i64, col: i64, edge: EdgeMethod) -> [u8; 3] {
        [
            self.sample8(0, row, col, edge),
            self.sample8(1, row, col, edge),
            self.sample8(2, row, col, edge),
        ]
    }

    /// Get a full 3-sample double pixel at a luma-frame coordinate.
    pub fn pixelf(&self, row: i64, col: i64, edge: EdgeMethod) -> [f64; 3] {
        [
            self.samplef(0, row, col, edge),
            self.samplef(1, row, col, edge),
            self.samplef(2, row, col, edge),
        ]
    }

    /// Set a full 3-sample 8-bit pixel at a luma-frame coordinate.
    ///
    /// Out-of-bounds targets are silently ignored.
    pub fn set_pixel8(&mut self, row: i64, col: i64, pixel: [u8; 3]) {
        for (plane, val) in pixel.into_iter().enumerate() {
            self.set_sample8(plane, row, col, val);
        }
    }

    /// Set a full 3-sample double pixel at a luma-frame coordinate.
    ///
    /// Out-of-bounds targets are silently ignored.
    pub fn set_pixelf(&mut self, row: i64, col: i64, pixel: [f64; 3]) {
        for (plane, val) in pixel.into_iter().enumerate() {
            self.set_samplef(plane, row, col, val);
        }
    }

    // ------------------------------------------------------------------
    // Plane-frame accessors
    // ------------------------------------------------------------------

    /// Get an 8-bit sample at a coordinate in the plane's own grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the allocated plane or the
    /// image holds double samples.
    #[inline]
    pub fn plane_8(&self, plane: usize, x: u32, y: u32) -> u8 {
        self.planes8()[self.plane_index(plane, x, y)]
    }

    /// Set an 8-bit sample at a coordinate in the plane's own grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the allocated plane or the
    /// image holds double samples.
    #[inline]
    pub fn set_plane_8(&mut self, plane: usize, x: u32, y: u32, val: u8) {
        let idx = self.plane_index(plane, x, y);
        self.planes8_mut()[idx] = val;
    }

    /// Get a double sample at a coordinate in the plane's own grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the allocated plane or the
    /// image holds fixed8 samples.
    #[inline]
    pub fn plane_f(&self, plane: usize, x: u32, y: u32) -> f64 {
        self.planesf()[self.plane_index(plane, x, y)]
    }

    /// Set a double sample at a coordinate in the plane's own grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the allocated plane or the
    /// image holds fixed8 samples.
    #[inline]
    pub fn set_plane_f(&mut self, plane: usize, x: u32, y: u32, val: f64) {
        let idx = self.plane_index(plane, x, y);
        self.planesf_mut()[idx] = val;
    }
}
