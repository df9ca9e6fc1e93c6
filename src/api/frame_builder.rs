use crate::api::HeatmapConfig;
use crate::api::{annotations, axes, cells, legend};
use crate::core::{BandScale, ChartLayout, LinearScale, ThresholdScale};
use crate::data::TemperatureDataset;
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Everything the frame builders need, resolved once by the engine.
pub(crate) struct FrameContext<'a> {
    pub config: &'a HeatmapConfig,
    pub dataset: &'a TemperatureDataset,
    pub layout: ChartLayout,
    pub x_scale: LinearScale,
    pub y_scale: &'a BandScale,
    pub color_scale: &'a ThresholdScale,
    pub legend_scale: LinearScale,
    pub year_range: (i32, i32),
    pub temperature_extent: (f64, f64),
}

/// Materializes the full scene: cells, both axes, the legend and the
/// title/description annotations.
pub(crate) fn build(ctx: &FrameContext<'_>) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(ctx.layout);

    for cell in cells::project_cells(ctx)? {
        frame.push_cell(cell);
    }
    axes::push_x_axis(ctx, &mut frame)?;
    axes::push_y_axis(ctx, &mut frame)?;
    legend::push_legend(ctx, &mut frame)?;
    annotations::push_annotations(ctx, &mut frame);

    Ok(frame)
}
