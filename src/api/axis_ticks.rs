use crate::core::{TimeScale, ValueScale, unix_seconds_to_year};
use crate::error::ChartResult;

/// One tick: resolved pixel position plus its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position_px: f64,
    pub label: String,
}

pub(crate) fn axis_ticks(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![range.0];
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}

/// Evenly spaced time-axis ticks labeled with their calendar year.
pub(crate) fn time_axis_ticks(
    scale: TimeScale,
    plot_width_px: f64,
    tick_count: usize,
) -> ChartResult<Vec<AxisTick>> {
    let mut ticks = Vec::with_capacity(tick_count);
    for time in axis_ticks(scale.domain(), tick_count) {
        ticks.push(AxisTick {
            position_px: scale.time_to_pixel(time, plot_width_px)?,
            label: unix_seconds_to_year(time)?.to_string(),
        });
    }
    Ok(ticks)
}

/// Evenly spaced value-axis ticks on the inverted vertical axis.
pub(crate) fn value_axis_ticks(
    scale: ValueScale,
    plot_height_px: f64,
    tick_count: usize,
) -> ChartResult<Vec<AxisTick>> {
    let mut ticks = Vec::with_capacity(tick_count);
    for value in axis_ticks(scale.domain(), tick_count) {
        ticks.push(AxisTick {
            position_px: scale.value_to_pixel(value, plot_height_px)?,
            label: format_tick_value(value),
        });
    }
    Ok(ticks)
}

/// Tick precision ladder: whole numbers once labels are large, more
/// digits as the magnitude shrinks.
pub(crate) fn format_tick_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        format!("{value:.0}")
    } else if magnitude >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
