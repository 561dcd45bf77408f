//! # Density-Independent Pixels (Dp)
//!
//! Component constants (track thickness, default thumb size, bubble width)
//! are authored in dp and converted to logical pixels with a process-wide
//! scale factor. Hosts that already report layout in density-independent
//! units leave [`SCALE_FACTOR`] unset, which means 1dp == 1px.
//!
//! ```
//! use glide_ui::Dp;
//!
//! let padding = Dp(16.0);
//! let pixels = padding.to_pixels_f32();
//! assert_eq!(Dp::from_pixels_f32(pixels), padding);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for dp-to-pixel conversion.
///
/// Initialized once by the host, may be updated later (for example when the
/// user changes the display scale).
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, initializing it on first use.
pub fn set_scale_factor(scale: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale;
    tracing::debug!(scale, "dp scale factor updated");
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to pixels as `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts to pixels as `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Creates a `Dp` from a pixel value.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Creates a `Dp` from an `f32` pixel value.
    pub fn from_pixels_f32(value: f32) -> Self {
        Self::from_pixels_f64(value as f64)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}
