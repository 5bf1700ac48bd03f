mod axis_ticks;
mod frame_builder;
mod hover_overlay;
mod render_plan;
mod snapshot;
mod style;

pub use frame_builder::build_render_frame;
pub use hit_test::{PathHit, nearest_point_at_x};
pub use hover_overlay::{HoverMarker, HoverOverlay, compute_hover_overlay};
pub use render_plan::{EndLabel, LegendEntry, RenderPlan, SeriesPlan, compute_render_plan};
pub use style::ChartStyle;

use tracing::{debug, trace};

use crate::core::{
    ChartLayout, DEFAULT_LINE_DRAW_MS, LineDrawAnimation, Margins, SeriesRow, SeriesTable,
    Viewport, VisibilitySet,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

/// Engine construction options: viewport, margins, chart texts and
/// visual style. Margins default to the layout the chart was designed
/// around: 20 top, 30 bottom, 50 left, and a 280px right gutter that
/// hosts the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub title: Option<String>,
    pub x_caption: Option<String>,
    pub y_caption: Option<String>,
    pub legend_header: Option<String>,
    pub line_draw_ms: f64,
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            title: None,
            x_caption: None,
            y_caption: None,
            legend_header: None,
            line_draw_ms: DEFAULT_LINE_DRAW_MS,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_caption(mut self, caption: impl Into<String>) -> Self {
        self.x_caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_y_caption(mut self, caption: impl Into<String>) -> Self {
        self.y_caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_legend_header(mut self, header: impl Into<String>) -> Self {
        self.legend_header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_line_draw_ms(mut self, duration_ms: f64) -> Self {
        self.line_draw_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.viewport, self.margins)
    }
}

/// The chart facade: owns the loaded table, the visibility toggles and
/// the hover state, and turns them into frames for the backend.
///
/// Rendering is a full clear-and-rebuild each call, so any sequence of
/// toggles, pointer moves and renders lands on the same output as a
/// fresh engine in the same state.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    table: Option<SeriesTable>,
    visibility: VisibilitySet,
    hover: HoverState,
    plan: Option<RenderPlan>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.layout().validate()?;

        Ok(Self {
            renderer,
            config,
            table: None,
            visibility: VisibilitySet::default(),
            hover: HoverState::default(),
            plan: None,
        })
    }

    /// Replaces the loaded table and resets every toggle to visible.
    pub fn set_table(&mut self, table: SeriesTable) {
        debug!(
            columns = table.columns().len(),
            rows = table.row_count(),
            "series table replaced"
        );
        self.visibility = table.default_visibility();
        self.table = Some(table);
        self.plan = None;
    }

    /// Validates and ingests raw rows, then installs the table.
    ///
    /// Malformed input leaves the engine untouched (no partial chart).
    pub fn load_rows(&mut self, columns: Vec<String>, rows: Vec<SeriesRow>) -> ChartResult<()> {
        let table = SeriesTable::from_rows(columns, rows)?;
        self.set_table(table);
        Ok(())
    }

    #[must_use]
    pub fn table(&self) -> Option<&SeriesTable> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    /// Replaces the whole toggle state, e.g. when restoring a session.
    ///
    /// Every id must be a column of the loaded table.
    pub fn set_visibility(&mut self, visibility: VisibilitySet) -> ChartResult<()> {
        let table = self.require_table()?;
        for (id, _) in visibility.iter() {
            if table.series_by_id(id).is_none() {
                return Err(ChartError::UnknownSeries(id.to_owned()));
            }
        }
        self.visibility = visibility;
        self.plan = None;
        Ok(())
    }

    /// Inverts one series' visibility and returns its new state.
    pub fn toggle_series(&mut self, id: &str) -> ChartResult<bool> {
        let visible = self.visibility.toggle(id)?;
        self.plan = None;
        debug!(series = id, visible, "legend toggle");
        Ok(visible)
    }

    /// Renders the chart fully revealed.
    pub fn render(&mut self) -> ChartResult<()> {
        self.render_with_progress(1.0)
    }

    /// Renders one frame at a line-reveal progress in `[0, 1]`.
    pub fn render_with_progress(&mut self, progress: f64) -> ChartResult<()> {
        let table = self.require_table()?;
        let plan = compute_render_plan(
            table,
            &self.visibility,
            self.config.layout(),
            self.config.style.curve_samples_per_segment,
        )?;

        let hover = if self.hover.visible {
            Some(self.overlay_for_plan(&plan)?)
        } else {
            None
        };

        let frame = build_render_frame(&plan, &self.config, progress, hover.as_ref())?;
        self.renderer.render(&frame)?;
        debug!(
            series = plan.series.len(),
            degenerate = plan.is_degenerate(),
            progress,
            "frame rendered"
        );
        self.plan = Some(plan);
        Ok(())
    }

    /// Routes a click: toggles and re-renders when a legend row is hit.
    ///
    /// Returns the toggled series id, or `None` for a miss.
    pub fn click(&mut self, x: f64, y: f64) -> ChartResult<Option<String>> {
        let Some(id) = self.legend_entry_at(x, y).map(str::to_owned) else {
            return Ok(None);
        };
        self.toggle_series(&id)?;
        self.render()?;
        Ok(Some(id))
    }

    /// The legend row under a viewport-space position, if any.
    #[must_use]
    pub fn legend_entry_at(&self, x: f64, y: f64) -> Option<&str> {
        let table = self.table.as_ref()?;
        let layout = self.config.layout();
        let (px, py) = layout.to_plot(x, y);

        for (index, column) in table.columns().iter().enumerate() {
            let (rx, ry, rw, rh) =
                frame_builder::legend_row_plot_rect(layout, &self.config.style, index);
            if px >= rx && px <= rx + rw && py >= ry && py < ry + rh {
                return Some(column);
            }
        }
        None
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        trace!(x, y, "pointer move");
        self.hover.on_pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.hover.on_pointer_leave();
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// Hover readout at the current pointer position.
    ///
    /// `None` while no pointer is inside the chart or no data is
    /// loaded. The pointer x is clamped into the plot area first, so a
    /// pointer over the margins reads the nearest plot edge.
    pub fn hover_overlay(&mut self) -> ChartResult<Option<HoverOverlay>> {
        if !self.hover.visible || self.table.is_none() {
            return Ok(None);
        }

        let hover = self.hover;
        let layout = self.config.layout();
        let plan = self.ensure_plan()?;

        let (px, py) = layout.to_plot(hover.x, hover.y);
        let (px, _) = layout.clamp_to_plot(px, py);
        compute_hover_overlay(plan, layout, px).map(Some)
    }

    /// Reveal animation for one currently drawn series.
    pub fn line_draw_animation(&mut self, id: &str) -> ChartResult<LineDrawAnimation> {
        let duration_ms = self.config.line_draw_ms;
        let known = self
            .table
            .as_ref()
            .is_some_and(|table| table.series_by_id(id).is_some());
        let plan = self.ensure_plan()?;

        match plan.series_by_id(id) {
            Some(series) => LineDrawAnimation::new(series.path.total_length(), duration_ms),
            None if known => Err(ChartError::InvalidData(format!(
                "series `{id}` is not currently drawn"
            ))),
            None => Err(ChartError::UnknownSeries(id.to_owned())),
        }
    }

    /// The plan backing the latest render, computing it if necessary.
    pub fn render_plan(&mut self) -> ChartResult<&RenderPlan> {
        self.ensure_plan()
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn require_table(&self) -> ChartResult<&SeriesTable> {
        self.table
            .as_ref()
            .ok_or_else(|| ChartError::DataSource("no data rows loaded".to_owned()))
    }

    pub(crate) fn ensure_plan(&mut self) -> ChartResult<&RenderPlan> {
        let plan = match self.plan.take() {
            Some(plan) => plan,
            None => {
                let table = self.require_table()?;
                compute_render_plan(
                    table,
                    &self.visibility,
                    self.config.layout(),
                    self.config.style.curve_samples_per_segment,
                )?
            }
        };
        Ok(self.plan.insert(plan))
    }

    fn overlay_for_plan(&self, plan: &RenderPlan) -> ChartResult<HoverOverlay> {
        let layout = self.config.layout();
        let (px, py) = layout.to_plot(self.hover.x, self.hover.y);
        let (px, _) = layout.clamp_to_plot(px, py);
        compute_hover_overlay(plan, layout, px)
    }
}
