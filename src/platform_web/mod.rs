//! Minimal web host surface.
//!
//! The engine and its SVG backend stay browser-agnostic; this adapter wraps
//! an emitted SVG document into a standalone HTML page that also hosts the
//! single tooltip element the interaction layer drives.

use crate::error::{ChartError, ChartResult};

/// Initial inline style of the tooltip element: hidden, pointer-transparent,
/// positioned by the interaction layer in page coordinates.
const TOOLTIP_STYLE: &str =
    "opacity: 0; position: absolute; pointer-events: none; background: #333; color: #fff; padding: 8px; border-radius: 4px;";

/// One standalone page hosting the chart and its tooltip element.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPage {
    svg_document: String,
    page_title: String,
}

impl HeatmapPage {
    pub fn new(svg_document: impl Into<String>) -> ChartResult<Self> {
        let svg_document = svg_document.into();
        if svg_document.is_empty() {
            return Err(ChartError::InvalidData(
                "page needs a non-empty svg document".to_owned(),
            ));
        }

        Ok(Self {
            svg_document,
            page_title: "Monthly Global Land-Surface Temperature".to_owned(),
        })
    }

    #[must_use]
    pub fn with_page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = page_title.into();
        self
    }

    /// The complete HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{svg}<div id=\"tooltip\" style=\"{tooltip_style}\"></div>\n</body>\n</html>\n",
            title = escape_html(&self.page_title),
            svg = self.svg_document,
            tooltip_style = TOOLTIP_STYLE,
        )
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
