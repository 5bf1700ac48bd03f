use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, normalize_range};
use crate::error::ChartResult;

/// Vertical axis model mapped onto an inverted Y pixel axis.
///
/// The domain is exactly the `[min, max]` extent handed in (no padding);
/// only a collapsed extent is widened so the scale stays invertible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        let normalized = normalize_range(min, max, MIN_SPAN_ABSOLUTE)?;
        Ok(Self {
            min: normalized.0,
            max: normalized.1,
        })
    }

    pub fn from_extent(extent: (f64, f64)) -> ChartResult<Self> {
        Self::new(extent.0, extent.1)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Maps a value to a plot-space Y pixel, largest value on top.
    pub fn value_to_pixel(self, value: f64, plot_height_px: f64) -> ChartResult<f64> {
        let upward = self.linear()?.domain_to_pixel(value, plot_height_px)?;
        Ok(plot_height_px - upward)
    }

    /// Inverse of [`ValueScale::value_to_pixel`], used by the tooltip readout.
    pub fn pixel_to_value(self, pixel: f64, plot_height_px: f64) -> ChartResult<f64> {
        self.linear()?
            .pixel_to_domain(plot_height_px - pixel, plot_height_px)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.min, self.max)
    }
}

const MIN_SPAN_ABSOLUTE: f64 = 0.000_001;
