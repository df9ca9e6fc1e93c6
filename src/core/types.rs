use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outer margins reserved for axes, titles and the legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.is_finite() && *side >= 0.0)
    }
}

/// Full chart surface plus the margin split that defines the plot area.
///
/// Primitive coordinates inside a frame are expressed in plot space; the
/// backend applies the `(left, top)` translation once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ChartLayout {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let layout = Self { viewport, margins };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no plot area".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }
}
