use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, normalize_range};
use crate::error::{ChartError, ChartResult};

/// Horizontal axis model spanning the full loaded date range.
///
/// The domain is always fitted from every row, never from the filtered
/// subset, so hiding series leaves the horizontal mapping untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: f64,
    end: f64,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let normalized = normalize_range(time_start, time_end, HALF_YEAR_SECONDS * 2.0)?;
        Ok(Self {
            start: normalized.0,
            end: normalized.1,
        })
    }

    /// Fits the domain from raw sample times.
    pub fn from_times(times: &[f64]) -> ChartResult<Self> {
        if times.is_empty() {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for time in times {
            if !time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(*time);
            max = max.max(*time);
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn time_to_pixel(self, time: f64, plot_width_px: f64) -> ChartResult<f64> {
        self.linear()?.domain_to_pixel(time, plot_width_px)
    }

    pub fn pixel_to_time(self, pixel: f64, plot_width_px: f64) -> ChartResult<f64> {
        self.linear()?.pixel_to_domain(pixel, plot_width_px)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.start, self.end)
    }
}

const HALF_YEAR_SECONDS: f64 = 182.0 * 24.0 * 3600.0;

/// Converts a calendar year into Unix seconds at Jan 1 00:00:00 UTC.
pub fn year_to_unix_seconds(year: i32) -> ChartResult<f64> {
    let date = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| ChartError::DataSource(format!("year {year} is out of range")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ChartError::DataSource(format!("year {year} is out of range")))?;
    Ok(midnight.and_utc().timestamp() as f64)
}

/// Recovers the calendar year a Unix-seconds timestamp falls in.
pub fn unix_seconds_to_year(seconds: f64) -> ChartResult<i32> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }

    let datetime = DateTime::from_timestamp(seconds as i64, 0).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {seconds} is out of range"))
    })?;
    Ok(datetime.year())
}
