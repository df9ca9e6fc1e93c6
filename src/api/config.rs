use crate::core::{ChartLayout, Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipFadeConfig;
use crate::render::Color;

/// The fixed 11-color diverging palette, cold to hot.
pub const DEFAULT_PALETTE: [Color; 11] = [
    Color::from_rgb8(0x25, 0x34, 0x94),
    Color::from_rgb8(0x2c, 0x7f, 0xb8),
    Color::from_rgb8(0x41, 0xb6, 0xc4),
    Color::from_rgb8(0x7f, 0xcd, 0xbb),
    Color::from_rgb8(0xc7, 0xe9, 0xb4),
    Color::from_rgb8(0xfe, 0xf0, 0xd9),
    Color::from_rgb8(0xfd, 0xd4, 0x9e),
    Color::from_rgb8(0xfd, 0xbb, 0x84),
    Color::from_rgb8(0xfc, 0x8d, 0x59),
    Color::from_rgb8(0xe3, 0x4a, 0x33),
    Color::from_rgb8(0xb3, 0x00, 0x00),
];

/// Presentation configuration for one heatmap rendering.
///
/// Defaults reproduce the reference chart: a 1400x700 surface, margins
/// reserving room for titles, axes and the legend, and the 11-bucket
/// diverging palette.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub palette: Vec<Color>,
    pub legend_width_px: f64,
    pub legend_total_height_px: f64,
    pub tooltip_fade: TooltipFadeConfig,
    pub title: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1400, 700),
            margins: Margins::new(100.0, 50.0, 150.0, 150.0),
            palette: DEFAULT_PALETTE.to_vec(),
            legend_width_px: 350.0,
            legend_total_height_px: 300.0,
            tooltip_fade: TooltipFadeConfig::default(),
            title: "Monthly Global Land-Surface Temperature".to_owned(),
        }
    }
}

impl HeatmapConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_tooltip_fade(mut self, tooltip_fade: TooltipFadeConfig) -> Self {
        self.tooltip_fade = tooltip_fade;
        self
    }

    pub fn layout(&self) -> ChartResult<ChartLayout> {
        ChartLayout::new(self.viewport, self.margins)
    }

    /// Height of one legend swatch row.
    #[must_use]
    pub fn legend_band_height_px(&self) -> f64 {
        self.legend_total_height_px / self.palette.len() as f64
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout()?;
        self.tooltip_fade.validate()?;

        if self.palette.len() < 2 {
            return Err(ChartError::InvalidData(
                "palette needs at least two colors".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        if !self.legend_width_px.is_finite() || self.legend_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "legend width must be finite and > 0".to_owned(),
            ));
        }
        if !self.legend_total_height_px.is_finite() || self.legend_total_height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "legend height must be finite and > 0".to_owned(),
            ));
        }
        if self.title.is_empty() {
            return Err(ChartError::InvalidData(
                "chart title must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
