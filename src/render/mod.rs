mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::OrdinalPalette;
pub use primitives::{
    CirclePrimitive, Color, DashState, LinePrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
