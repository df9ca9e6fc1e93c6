use crate::api::axes::{AXIS_STROKE_WIDTH, AXIS_TICK_PADDING_PX};
use crate::api::frame_builder::FrameContext;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FrameSection, LinePrimitive, RectPrimitive, RenderFrame, TextBaseline, TextHAlign,
    TextPrimitive,
};

const LEGEND_TICK_SIZE_PX: f64 = 8.0;
const LEGEND_TICK_FONT_PX: f64 = 14.0;
const LEGEND_SWATCH_BORDER_PX: f64 = 1.0;

/// Bucket legend: one swatch per color bucket tiling the temperature
/// extent, plus a tick row at the interior breakpoints.
///
/// The open-ended first and last buckets clamp to the dataset extent, so
/// the swatches tile `[min, max]` without gaps or overlaps.
pub(crate) fn push_legend(ctx: &FrameContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
    let legend_width = ctx.config.legend_width_px;
    let band_height = ctx.config.legend_band_height_px();
    let origin_y = ctx.layout.plot_height() + ctx.layout.margins.bottom / 2.0;
    let (min_temperature, max_temperature) = ctx.temperature_extent;

    for bucket in 0..ctx.color_scale.bucket_count() {
        let (lower, upper) = ctx.color_scale.bucket_extent(bucket)?;
        let lower = lower.unwrap_or(min_temperature);
        let upper = upper.unwrap_or(max_temperature);

        let x0 = ctx.legend_scale.domain_to_pixel(lower, legend_width)?;
        let x1 = ctx.legend_scale.domain_to_pixel(upper, legend_width)?;
        if x1 - x0 <= 0.0 {
            continue;
        }

        let fill = *ctx.config.palette.get(bucket).ok_or_else(|| {
            ChartError::InvalidData(format!("no palette color for bucket {bucket}"))
        })?;
        frame.push_rect(
            FrameSection::Legend,
            RectPrimitive::new(x0, origin_y, x1 - x0, band_height, fill)
                .with_border(LEGEND_SWATCH_BORDER_PX, Color::BLACK),
        );
    }

    let axis_y = origin_y + band_height;
    frame.push_line(
        FrameSection::Legend,
        LinePrimitive::new(0.0, axis_y, legend_width, axis_y, AXIS_STROKE_WIDTH, Color::BLACK),
    );

    for breakpoint in ctx.color_scale.breakpoints() {
        let x = ctx.legend_scale.domain_to_pixel(*breakpoint, legend_width)?;
        frame.push_line(
            FrameSection::Legend,
            LinePrimitive::new(
                x,
                axis_y,
                x,
                axis_y + LEGEND_TICK_SIZE_PX,
                AXIS_STROKE_WIDTH,
                Color::BLACK,
            ),
        );
        frame.push_text(
            FrameSection::Legend,
            TextPrimitive::new(
                format!("{breakpoint:.1}"),
                x,
                axis_y + LEGEND_TICK_SIZE_PX + AXIS_TICK_PADDING_PX,
                LEGEND_TICK_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_baseline(TextBaseline::Hanging),
        );
    }

    Ok(())
}
