mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{FrameSection, RenderFrame, SectionPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CellPrimitive, Color, LinePrimitive, RectPrimitive, TextBaseline, TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
