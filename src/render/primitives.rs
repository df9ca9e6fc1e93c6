use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, as palettes are usually written.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css_string(self) -> String {
        let to_u8 = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                to_u8(self.red),
                to_u8(self.green),
                to_u8(self.blue)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                to_u8(self.red),
                to_u8(self.green),
                to_u8(self.blue),
                self.alpha
            )
        }
    }
}

/// Draw command for one line segment in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rectangle in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::BLACK,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_rect_geometry(self.x, self.y, self.width, self.height)?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of the text relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    Hanging,
}

/// Draw command for one label in plot space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub baseline: TextBaseline,
    /// Clockwise rotation around `(x, y)` in degrees; 0 draws upright.
    pub rotate_degrees: f64,
    /// Stable element id for external inspection of the emitted document.
    pub element_id: Option<String>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            baseline: TextBaseline::Alphabetic,
            rotate_degrees: 0.0,
            element_id: None,
        }
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotate_degrees: f64) -> Self {
        self.rotate_degrees = rotate_degrees;
        self
    }

    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotate_degrees.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one heatmap cell.
///
/// Besides geometry and fill, a cell carries the record identity that the
/// emitted document exposes as `data-month` / `data-year` / `data-temp`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub year: i32,
    pub month_zero_based: u32,
    /// Absolute temperature, already rounded to one decimal.
    pub temperature_label: String,
}

impl CellPrimitive {
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        year: i32,
        month_zero_based: u32,
        temperature_label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            year,
            month_zero_based,
            temperature_label: temperature_label.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_rect_geometry(self.x, self.y, self.width, self.height)?;
        if self.month_zero_based > 11 {
            return Err(ChartError::InvalidData(format!(
                "cell month index {} out of range 0-11",
                self.month_zero_based
            )));
        }
        if self.temperature_label.is_empty() {
            return Err(ChartError::InvalidData(
                "cell temperature label must not be empty".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

fn validate_rect_geometry(x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "rect origin must be finite".to_owned(),
        ));
    }
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidData(
            "rect size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
