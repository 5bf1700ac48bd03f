use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual constants consumed by the frame builder.
///
/// Defaults carry the layout the chart was designed around: 10px legend
/// swatches on a 20px pitch in the right margin, 5 ticks per axis, a
/// 1px black tracking line with 4px hover markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub gridline_color: Color,
    pub gridline_stroke_width: f64,
    pub tick_count: usize,
    pub tick_font_px: f64,
    pub tick_label_gap_px: f64,

    pub title_color: Color,
    pub title_font_px: f64,
    pub caption_font_px: f64,

    pub series_stroke_width: f64,
    pub curve_samples_per_segment: usize,
    pub end_label_font_px: f64,
    pub end_label_dx: f64,

    pub legend_offset_x: f64,
    pub legend_swatch_size: f64,
    pub legend_row_pitch: f64,
    pub legend_label_gap: f64,
    pub legend_font_px: f64,
    pub legend_header_font_px: f64,
    pub legend_hit_width: f64,

    pub hover_line_color: Color,
    pub hover_line_width: f64,
    pub hover_marker_radius: f64,
    pub hover_marker_stroke_width: f64,
    pub hover_label_font_px: f64,
    pub hover_label_dx: f64,
    pub hover_label_dy: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            axis_stroke_width: 1.0,
            gridline_color: Color::rgba(0.0, 0.0, 0.0, 0.12),
            gridline_stroke_width: 1.0,
            tick_count: 5,
            tick_font_px: 10.0,
            tick_label_gap_px: 8.0,

            title_color: Color::from_rgb8(0x1a, 0x71, 0x9c),
            title_font_px: 16.0,
            caption_font_px: 12.0,

            series_stroke_width: 1.5,
            curve_samples_per_segment: 16,
            end_label_font_px: 10.0,
            end_label_dx: 3.0,

            legend_offset_x: 100.0,
            legend_swatch_size: 10.0,
            legend_row_pitch: 20.0,
            legend_label_gap: 18.0,
            legend_font_px: 10.0,
            legend_header_font_px: 15.0,
            legend_hit_width: 140.0,

            hover_line_color: Color::BLACK,
            hover_line_width: 1.0,
            hover_marker_radius: 4.0,
            hover_marker_stroke_width: 1.0,
            hover_label_font_px: 14.0,
            hover_label_dx: 10.0,
            hover_label_dy: -4.0,
        }
    }
}
