use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::api::hit_test::nearest_point_at_x;
use crate::api::render_plan::RenderPlan;
use crate::core::ChartLayout;
use crate::error::ChartResult;
use crate::render::Color;

/// One hover marker: the tracked position on a visible series under the
/// pointer, with its readout label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverMarker {
    pub series_id: String,
    pub color: Color,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// The full hover readout for one pointer position: the tracking-line
/// x plus one marker per visible series with drawable geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverOverlay {
    pub plot_x: f64,
    pub markers: Vec<HoverMarker>,
}

impl HoverOverlay {
    /// Marker vertically closest to a plot-space pointer y, for hosts
    /// that want to emphasize a single tooltip.
    #[must_use]
    pub fn nearest_marker(&self, plot_y: f64) -> Option<&HoverMarker> {
        if !plot_y.is_finite() {
            return None;
        }

        let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 8]> = SmallVec::new();
        for (index, marker) in self.markers.iter().enumerate() {
            candidates.push((OrderedFloat((marker.y - plot_y).abs()), index));
        }

        candidates
            .into_iter()
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, index)| &self.markers[index])
    }
}

/// Computes hover markers for every planned series at a plot-space
/// pointer x.
///
/// Hidden series never reach the plan, so they are skipped by
/// construction. Each marker pins to the pointer x with the series'
/// nearest-path y, and the label carries the value mapped back through
/// the vertical scale, to 2 decimal places.
pub fn compute_hover_overlay(
    plan: &RenderPlan,
    layout: ChartLayout,
    pointer_plot_x: f64,
) -> ChartResult<HoverOverlay> {
    let plot_height = layout.plot_height();
    let mut markers = Vec::with_capacity(plan.series.len());

    if let Some(value_scale) = plan.value_scale {
        for series in &plan.series {
            let Some(hit) = nearest_point_at_x(&series.path, pointer_plot_x) else {
                continue;
            };
            let value = value_scale.pixel_to_value(hit.y, plot_height)?;
            let value = (value * 100.0).round() / 100.0;
            markers.push(HoverMarker {
                series_id: series.id.clone(),
                color: series.color,
                x: pointer_plot_x,
                y: hit.y,
                value,
                label: format!("{value:.2}"),
            });
        }
    }

    trace!(
        pointer_plot_x,
        markers = markers.len(),
        "hover overlay computed"
    );

    Ok(HoverOverlay {
        plot_x: pointer_plot_x,
        markers,
    })
}
