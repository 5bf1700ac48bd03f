use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChartLayout, PathGeometry, PixelPoint, SeriesTable, TimeScale, ValueScale, VisibilitySet,
};
use crate::error::ChartResult;
use crate::render::{Color, OrdinalPalette};

/// One legend row. Every table column appears here, visible or not,
/// because the legend doubles as the filter control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: String,
    pub color: Color,
    pub visible: bool,
}

/// Label anchored at a rendered line's last sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Fully projected geometry for one visible series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPlan {
    pub id: String,
    pub color: Color,
    pub path: PathGeometry,
    pub end_label: Option<EndLabel>,
}

/// Deterministic scene computation for one draw pass.
///
/// The plan is the testable middle layer: everything the frame builder
/// draws and everything the hover hit test queries lives here, with no
/// rendering surface involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub time_scale: TimeScale,
    /// `None` when no visible series contributes a value; the frame
    /// degrades to axes chrome and legend only.
    pub value_scale: Option<ValueScale>,
    pub series: Vec<SeriesPlan>,
    pub legend: Vec<LegendEntry>,
}

impl RenderPlan {
    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&SeriesPlan> {
        self.series.iter().find(|series| series.id == id)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.value_scale.is_none()
    }
}

/// Computes the render plan for the current visibility state.
///
/// The time domain is fitted from every row; the value domain only from
/// visible series. Color assignment walks the full column list so a
/// series keeps its color no matter which subset is displayed.
pub fn compute_render_plan(
    table: &SeriesTable,
    visibility: &VisibilitySet,
    layout: ChartLayout,
    samples_per_segment: usize,
) -> ChartResult<RenderPlan> {
    layout.validate()?;

    let time_scale = TimeScale::from_times(table.times())?;
    let value_scale = match table.value_extent(visibility) {
        Some(extent) => Some(ValueScale::from_extent(extent)?),
        None => {
            debug!("no visible series values; planning axes and legend only");
            None
        }
    };

    let palette = OrdinalPalette::category10();
    let legend = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, id)| LegendEntry {
            id: id.clone(),
            color: palette.color_at(index),
            visible: visibility.is_visible(id),
        })
        .collect();

    let mut series_plans = Vec::new();
    if let Some(value_scale) = value_scale {
        let plot_width = layout.plot_width();
        let plot_height = layout.plot_height();

        for (index, series) in table.series().iter().enumerate() {
            if !visibility.is_visible(&series.id) {
                continue;
            }

            let mut projected = Vec::with_capacity(series.points.len());
            for point in &series.points {
                let Some(value) = point.value else {
                    continue;
                };
                projected.push(PixelPoint::new(
                    time_scale.time_to_pixel(point.time, plot_width)?,
                    value_scale.value_to_pixel(value, plot_height)?,
                ));
            }
            if projected.is_empty() {
                // All samples missing: legend-only series, nothing to draw.
                continue;
            }

            let end_label = projected.last().map(|last| EndLabel {
                text: series.id.clone(),
                x: last.x,
                y: last.y,
            });

            series_plans.push(SeriesPlan {
                id: series.id.clone(),
                color: palette.color_at(index),
                path: PathGeometry::from_curve_points(&projected, samples_per_segment)?,
                end_label,
            });
        }
    }

    debug!(
        visible_series = series_plans.len(),
        legend_entries = table.columns().len(),
        degenerate = value_scale.is_none(),
        "render plan computed"
    );

    Ok(RenderPlan {
        time_scale,
        value_scale,
        series: series_plans,
        legend,
    })
}
