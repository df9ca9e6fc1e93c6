use crate::api::frame_builder::FrameContext;
use crate::error::ChartResult;
use crate::render::{
    Color, FrameSection, LinePrimitive, RenderFrame, TextBaseline, TextHAlign, TextPrimitive,
};

pub(super) const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub(super) const AXIS_TICK_PADDING_PX: f64 = 3.0;
pub(super) const AXIS_TICK_FONT_PX: f64 = 16.0;
pub(super) const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Year axis: baseline, round-stepped integer ticks, tick labels.
///
/// The tick target count follows the reference chart: one tick per decade
/// of the year span.
pub(crate) fn push_x_axis(ctx: &FrameContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
    let plot_width = ctx.layout.plot_width();
    let plot_height = ctx.layout.plot_height();
    let (min_year, max_year) = ctx.year_range;

    frame.push_line(
        FrameSection::XAxis,
        LinePrimitive::new(
            0.0,
            plot_height,
            plot_width,
            plot_height,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ),
    );

    let target_count = (f64::from(max_year - min_year) / 10.0).floor() as usize;
    for tick in nice_tick_values(f64::from(min_year), f64::from(max_year), target_count) {
        let x = ctx.x_scale.domain_to_pixel(tick, plot_width)?;
        frame.push_line(
            FrameSection::XAxis,
            LinePrimitive::new(
                x,
                plot_height,
                x,
                plot_height + AXIS_TICK_SIZE_PX,
                AXIS_STROKE_WIDTH,
                Color::BLACK,
            ),
        );
        frame.push_text(
            FrameSection::XAxis,
            TextPrimitive::new(
                format!("{}", tick as i64),
                x,
                plot_height + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX,
                AXIS_TICK_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_baseline(TextBaseline::Hanging),
        );
    }

    Ok(())
}

/// Month band axis: baseline plus a centered tick and label per band.
pub(crate) fn push_y_axis(ctx: &FrameContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
    let plot_height = ctx.layout.plot_height();

    frame.push_line(
        FrameSection::YAxis,
        LinePrimitive::new(0.0, 0.0, 0.0, plot_height, AXIS_STROKE_WIDTH, Color::BLACK),
    );

    for label in ctx.y_scale.labels() {
        let y = ctx.y_scale.center(label, plot_height)?;
        frame.push_line(
            FrameSection::YAxis,
            LinePrimitive::new(-AXIS_TICK_SIZE_PX, y, 0.0, y, AXIS_STROKE_WIDTH, Color::BLACK),
        );
        frame.push_text(
            FrameSection::YAxis,
            TextPrimitive::new(
                label.clone(),
                -(AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX),
                y,
                AXIS_TICK_FONT_PX,
                Color::BLACK,
                TextHAlign::Right,
            )
            .with_baseline(TextBaseline::Middle),
        );
    }

    Ok(())
}

/// Round-stepped tick values covering `[start, stop]`, aiming for
/// `target_count` ticks with a 1/2/5-based step.
pub(crate) fn nice_tick_values(start: f64, stop: f64, target_count: usize) -> Vec<f64> {
    if target_count == 0 || !start.is_finite() || !stop.is_finite() || start >= stop {
        return Vec::new();
    }

    let step = nice_tick_step(start, stop, target_count);
    if step <= 0.0 {
        return Vec::new();
    }

    let first = (start / step).ceil();
    let last = (stop / step).floor();
    let mut ticks = Vec::with_capacity((last - first) as usize + 1);
    let mut index = first;
    while index <= last {
        ticks.push(index * step);
        index += 1.0;
    }
    ticks
}

/// 1/2/5-stepped increment close to `span / target_count`.
fn nice_tick_step(start: f64, stop: f64, target_count: usize) -> f64 {
    let raw_step = (stop - start) / target_count as f64;
    let power = raw_step.log10().floor();
    let base = 10.0_f64.powf(power);
    let error = raw_step / base;

    let factor = if error >= 50.0_f64.sqrt() {
        10.0
    } else if error >= 10.0_f64.sqrt() {
        5.0
    } else if error >= 2.0_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * base
}
