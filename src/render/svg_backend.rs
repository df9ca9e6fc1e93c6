use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CellPrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, SectionPrimitives,
    TextBaseline, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub cells_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// SVG renderer backend.
///
/// Produces one self-contained `<svg>` document per draw pass. Output is
/// deterministic for a given frame, so emitted documents can be compared
/// byte-for-byte in tests.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// The document produced by the most recent draw pass.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Consumes the renderer and returns the last document.
    pub fn into_document(self) -> ChartResult<String> {
        self.document
            .ok_or_else(|| ChartError::InvalidData("no frame has been rendered".to_owned()))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = SvgRenderStats::default();
        let viewport = frame.layout.viewport;
        let margins = frame.layout.margins;

        let mut out = String::new();
        write_fmt(&mut out, format_args!(
            "<svg class=\"map\" xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            viewport.width, viewport.height
        ))?;
        write_fmt(&mut out, format_args!(
            "<g transform=\"translate({}, {})\">\n",
            fmt_number(margins.left),
            fmt_number(margins.top)
        ))?;

        for cell in &frame.cells {
            write_cell(&mut out, cell)?;
            stats.cells_drawn += 1;
        }

        for section in &frame.sections {
            write_section(&mut out, section, &mut stats)?;
        }

        out.push_str("</g>\n</svg>\n");

        self.document = Some(out);
        self.last_stats = stats;
        Ok(())
    }
}

fn write_section(
    out: &mut String,
    section: &SectionPrimitives,
    stats: &mut SvgRenderStats,
) -> ChartResult<()> {
    let group_id = section.section.element_id();
    if let Some(id) = group_id {
        write_fmt(out, format_args!("<g id=\"{id}\">\n"))?;
    }

    for line in &section.lines {
        write_line(out, line)?;
        stats.lines_drawn += 1;
    }
    for rect in &section.rects {
        write_rect(out, rect)?;
        stats.rects_drawn += 1;
    }
    for text in &section.texts {
        write_text(out, text)?;
        stats.texts_drawn += 1;
    }

    if group_id.is_some() {
        out.push_str("</g>\n");
    }
    Ok(())
}

fn write_cell(out: &mut String, cell: &CellPrimitive) -> ChartResult<()> {
    write_fmt(out, format_args!(
        "<rect class=\"cell\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        cell.month_zero_based,
        cell.year,
        escape_text(&cell.temperature_label),
        fmt_number(cell.x),
        fmt_number(cell.y),
        fmt_number(cell.width),
        fmt_number(cell.height),
        cell.fill.to_css_string()
    ))
}

fn write_line(out: &mut String, line: &LinePrimitive) -> ChartResult<()> {
    write_fmt(out, format_args!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        fmt_number(line.x1),
        fmt_number(line.y1),
        fmt_number(line.x2),
        fmt_number(line.y2),
        line.color.to_css_string(),
        fmt_number(line.stroke_width)
    ))
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> ChartResult<()> {
    if rect.border_width > 0.0 {
        write_fmt(out, format_args!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_number(rect.x),
            fmt_number(rect.y),
            fmt_number(rect.width),
            fmt_number(rect.height),
            rect.fill_color.to_css_string(),
            rect.border_color.to_css_string(),
            fmt_number(rect.border_width)
        ))
    } else {
        write_fmt(out, format_args!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            fmt_number(rect.x),
            fmt_number(rect.y),
            fmt_number(rect.width),
            fmt_number(rect.height),
            rect.fill_color.to_css_string()
        ))
    }
}

fn write_text(out: &mut String, text: &TextPrimitive) -> ChartResult<()> {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };

    out.push_str("<text");
    if let Some(id) = &text.element_id {
        write_fmt(out, format_args!(" id=\"{}\"", escape_text(id)))?;
    }
    write_fmt(out, format_args!(
        " x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"",
        fmt_number(text.x),
        fmt_number(text.y),
        fmt_number(text.font_size_px),
        text.color.to_css_string()
    ))?;
    match text.baseline {
        TextBaseline::Alphabetic => {}
        TextBaseline::Middle => out.push_str(" dominant-baseline=\"central\""),
        TextBaseline::Hanging => out.push_str(" dominant-baseline=\"hanging\""),
    }
    if text.rotate_degrees != 0.0 {
        write_fmt(out, format_args!(
            " transform=\"rotate({}, {}, {})\"",
            fmt_number(text.rotate_degrees),
            fmt_number(text.x),
            fmt_number(text.y)
        ))?;
    }
    write_fmt(out, format_args!(">{}</text>\n", escape_text(&text.text)))
}

/// Compact coordinate formatting: round to 1/100 px and trim zeros.
fn fmt_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut formatted = format!("{rounded:.2}");
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    if formatted == "-0" {
        formatted = "0".to_owned();
    }
    formatted
}

fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn write_fmt(out: &mut String, args: std::fmt::Arguments<'_>) -> ChartResult<()> {
    out.write_fmt(args)
        .map_err(|err| ChartError::InvalidData(format!("failed to write svg document: {err}")))
}

#[cfg(test)]
mod tests {
    use super::fmt_number;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_number(150.0), "150");
        assert_eq!(fmt_number(27.272727), "27.27");
        assert_eq!(fmt_number(37.5), "37.5");
        assert_eq!(fmt_number(-0.0001), "0");
    }
}
