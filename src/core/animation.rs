use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default reveal duration for newly drawn lines.
pub const DEFAULT_LINE_DRAW_MS: f64 = 3000.0;

/// Linear-eased stroke-dash reveal of a drawn path.
///
/// The dash pattern covers the whole path (`dash = gap = total_length`)
/// and the offset shrinks from the full length to zero, so the line
/// appears to draw itself from its start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDrawAnimation {
    total_length: f64,
    duration_ms: f64,
}

impl LineDrawAnimation {
    pub fn new(total_length: f64, duration_ms: f64) -> ChartResult<Self> {
        if !total_length.is_finite() || total_length < 0.0 {
            return Err(ChartError::InvalidData(
                "animation path length must be finite and >= 0".to_owned(),
            ));
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            total_length,
            duration_ms,
        })
    }

    #[must_use]
    pub fn total_length(self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    /// Completed fraction at `elapsed_ms`, clamped into `[0, 1]`.
    #[must_use]
    pub fn progress_at(self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() {
            return 0.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Dash offset at `elapsed_ms`: full length when untouched, zero
    /// once the reveal completes.
    #[must_use]
    pub fn dash_offset_at(self, elapsed_ms: f64) -> f64 {
        self.total_length * (1.0 - self.progress_at(elapsed_ms))
    }

    #[must_use]
    pub fn is_complete(self, elapsed_ms: f64) -> bool {
        self.progress_at(elapsed_ms) >= 1.0
    }
}
