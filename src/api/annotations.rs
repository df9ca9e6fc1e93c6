use crate::api::frame_builder::FrameContext;
use crate::render::{Color, FrameSection, RenderFrame, TextBaseline, TextHAlign, TextPrimitive};

const TITLE_FONT_PX: f64 = 26.0;
const DESCRIPTION_FONT_PX: f64 = 18.0;
const AXIS_TITLE_FONT_PX: f64 = 22.0;
const DESCRIPTION_OFFSET_PX: f64 = 30.0;
const X_AXIS_TITLE_OFFSET_PX: f64 = 60.0;
const Y_AXIS_TITLE_OFFSET_PX: f64 = 90.0;

/// Title, description and the two axis titles.
pub(crate) fn push_annotations(ctx: &FrameContext<'_>, frame: &mut RenderFrame) {
    let plot_width = ctx.layout.plot_width();
    let plot_height = ctx.layout.plot_height();
    let (min_year, max_year) = ctx.year_range;
    let title_y = -ctx.layout.margins.top / 2.0;

    frame.push_text(
        FrameSection::Annotations,
        TextPrimitive::new(
            ctx.config.title.clone(),
            plot_width / 2.0,
            title_y,
            TITLE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_element_id("title"),
    );

    frame.push_text(
        FrameSection::Annotations,
        TextPrimitive::new(
            format!(
                "{min_year} - {max_year}: base temperature {}°C",
                ctx.dataset.base_temperature
            ),
            plot_width / 2.0,
            title_y + DESCRIPTION_OFFSET_PX,
            DESCRIPTION_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_element_id("description"),
    );

    frame.push_text(
        FrameSection::Annotations,
        TextPrimitive::new(
            "Years",
            plot_width / 2.0,
            plot_height + X_AXIS_TITLE_OFFSET_PX,
            AXIS_TITLE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ),
    );

    frame.push_text(
        FrameSection::Annotations,
        TextPrimitive::new(
            "Months",
            -Y_AXIS_TITLE_OFFSET_PX,
            plot_height / 2.0,
            AXIS_TITLE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_baseline(TextBaseline::Middle)
        .with_rotation(-90.0),
    );
}
