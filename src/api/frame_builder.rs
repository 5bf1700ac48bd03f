use crate::api::axis_ticks::{time_axis_ticks, value_axis_ticks};
use crate::api::hover_overlay::HoverOverlay;
use crate::api::render_plan::RenderPlan;
use crate::api::style::ChartStyle;
use crate::api::ChartEngineConfig;
use crate::core::{ChartLayout, PixelPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, DashState, LinePrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

/// Materializes one complete frame from a render plan.
///
/// `progress` drives the stroke-dash line reveal: 0 hides every series
/// path, 1 shows them fully. Axes, legend and labels are unaffected.
/// The frame is rebuilt whole every call; nothing carries over from a
/// previous pass.
pub fn build_render_frame(
    plan: &RenderPlan,
    config: &ChartEngineConfig,
    progress: f64,
    hover: Option<&HoverOverlay>,
) -> ChartResult<RenderFrame> {
    if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
        return Err(ChartError::InvalidData(
            "draw progress must be finite and in [0, 1]".to_owned(),
        ));
    }

    let layout = config.layout();
    layout.validate()?;
    let style = &config.style;
    let plot_height = layout.plot_height();

    let mut frame = RenderFrame::new(layout.viewport);

    build_axes_and_gridlines(&mut frame, plan, layout, style)?;
    build_chrome_texts(&mut frame, config, layout);
    build_legend(&mut frame, plan, layout, style);

    for series in &plan.series {
        let vertices = series.path.vertices();
        if vertices.len() >= 2 {
            let vertices = vertices
                .iter()
                .map(|vertex| {
                    let (x, y) = layout.to_viewport(vertex.x, vertex.y);
                    PixelPoint::new(x, y)
                })
                .collect();
            let mut polyline =
                PolylinePrimitive::new(vertices, style.series_stroke_width, series.color);
            let total = series.path.total_length();
            if progress < 1.0 && total > 0.0 {
                polyline = polyline.with_dash(DashState {
                    dash_length: total,
                    gap_length: total,
                    offset: total * (1.0 - progress),
                });
            }
            frame.polylines.push(polyline);
        }

        if let Some(end_label) = &series.end_label {
            let (x, y) = layout.to_viewport(end_label.x + style.end_label_dx, end_label.y);
            frame.texts.push(TextPrimitive::new(
                end_label.text.clone(),
                x,
                y + style.end_label_font_px * 0.35,
                style.end_label_font_px,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }

    if let Some(hover) = hover {
        let (line_x, top_y) = layout.to_viewport(hover.plot_x, 0.0);
        frame.lines.push(LinePrimitive::new(
            line_x,
            top_y,
            line_x,
            top_y + plot_height,
            style.hover_line_width,
            style.hover_line_color,
        ));

        for marker in &hover.markers {
            let (cx, cy) = layout.to_viewport(marker.x, marker.y);
            frame.circles.push(CirclePrimitive::new(
                cx,
                cy,
                style.hover_marker_radius,
                marker.color,
                style.hover_marker_stroke_width,
            ));
            frame.texts.push(TextPrimitive::new(
                marker.label.clone(),
                cx + style.hover_label_dx,
                cy + style.hover_label_dy,
                style.hover_label_font_px,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }

    frame.validate()?;
    Ok(frame)
}

fn build_axes_and_gridlines(
    frame: &mut RenderFrame,
    plan: &RenderPlan,
    layout: ChartLayout,
    style: &ChartStyle,
) -> ChartResult<()> {
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();
    let (origin_x, origin_y) = layout.to_viewport(0.0, 0.0);

    // Axis lines along the plot's bottom and left edges.
    frame.lines.push(LinePrimitive::new(
        origin_x,
        origin_y + plot_height,
        origin_x + plot_width,
        origin_y + plot_height,
        style.axis_stroke_width,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        origin_x,
        origin_y,
        origin_x,
        origin_y + plot_height,
        style.axis_stroke_width,
        style.axis_color,
    ));

    for tick in time_axis_ticks(plan.time_scale, plot_width, style.tick_count)? {
        let x = origin_x + tick.position_px;
        frame.lines.push(LinePrimitive::new(
            x,
            origin_y,
            x,
            origin_y + plot_height,
            style.gridline_stroke_width,
            style.gridline_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label,
            x,
            origin_y + plot_height + style.tick_label_gap_px + style.tick_font_px,
            style.tick_font_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }

    // A hidden-everything state still renders the time axis; the value
    // axis has no domain to label, so its ticks are simply absent.
    if let Some(value_scale) = plan.value_scale {
        for tick in value_axis_ticks(value_scale, plot_height, style.tick_count)? {
            let y = origin_y + tick.position_px;
            frame.lines.push(LinePrimitive::new(
                origin_x,
                y,
                origin_x + plot_width,
                y,
                style.gridline_stroke_width,
                style.gridline_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                origin_x - style.tick_label_gap_px,
                y + style.tick_font_px * 0.35,
                style.tick_font_px,
                style.axis_color,
                TextHAlign::Right,
            ));
        }
    }

    Ok(())
}

fn build_chrome_texts(frame: &mut RenderFrame, config: &ChartEngineConfig, layout: ChartLayout) {
    let style = &config.style;
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();

    if let Some(title) = &config.title {
        let (x, y) = layout.to_viewport(plot_width / 2.0, -layout.margins.top / 2.0 + 2.0);
        frame.texts.push(TextPrimitive::new(
            title.clone(),
            x,
            y,
            style.title_font_px,
            style.title_color,
            TextHAlign::Center,
        ));
    }

    if let Some(caption) = &config.x_caption {
        let (x, y) = layout.to_viewport(
            plot_width,
            plot_height + style.tick_label_gap_px + style.tick_font_px + 8.0,
        );
        frame.texts.push(TextPrimitive::new(
            caption.clone(),
            x,
            y,
            style.caption_font_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }

    if let Some(caption) = &config.y_caption {
        let (x, y) = layout.to_viewport(-36.0, plot_height / 2.0);
        frame.texts.push(
            TextPrimitive::new(
                caption.clone(),
                x,
                y,
                style.caption_font_px,
                style.axis_color,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
    }

    if let Some(header) = &config.legend_header {
        let (x, y) = layout.to_viewport(plot_width + 58.0, -7.0);
        frame.texts.push(TextPrimitive::new(
            header.clone(),
            x,
            y,
            style.legend_header_font_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
}

fn build_legend(frame: &mut RenderFrame, plan: &RenderPlan, layout: ChartLayout, style: &ChartStyle) {
    for (index, entry) in plan.legend.iter().enumerate() {
        let (row_x, row_y, _, _) = legend_row_plot_rect(layout, style, index);
        let (x, y) = layout.to_viewport(row_x, row_y);

        let mut swatch =
            RectPrimitive::new(x, y, style.legend_swatch_size, style.legend_swatch_size)
                .with_stroke(entry.color);
        // Hidden series keep their stroke but lose the fill, so the
        // swatch reads as an unchecked box.
        if entry.visible {
            swatch = swatch.with_fill(entry.color);
        }
        frame.rects.push(swatch);

        frame.texts.push(TextPrimitive::new(
            entry.id.clone(),
            x + style.legend_label_gap,
            y + style.legend_swatch_size * 0.9 + 2.0,
            style.legend_font_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
}

/// Plot-space hit region for one legend row, shared by drawing and
/// click routing so the two can never disagree.
pub(crate) fn legend_row_plot_rect(
    layout: ChartLayout,
    style: &ChartStyle,
    index: usize,
) -> (f64, f64, f64, f64) {
    let x = layout.plot_width() + style.legend_offset_x;
    let y = index as f64 * style.legend_row_pitch;
    (x, y, style.legend_hit_width, style.legend_row_pitch)
}
