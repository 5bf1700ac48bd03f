use crate::api::ChartEngine;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

impl<R: Renderer> ChartEngine<R> {
    /// Serializes the current render plan as pretty-printed JSON.
    ///
    /// Intended for debugging sessions and golden tests; the output
    /// carries scales, projected geometry and legend state verbatim.
    pub fn render_plan_json(&mut self) -> ChartResult<String> {
        let plan = self.ensure_plan()?;
        serde_json::to_string_pretty(plan)
            .map_err(|err| ChartError::InvalidData(format!("plan serialization failed: {err}")))
    }
}
