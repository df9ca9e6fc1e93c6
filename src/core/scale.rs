use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel mapping over an explicit pixel span.
///
/// Used for the year axis and for the legend's temperature axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale from a data extent, widening a degenerate extent by
    /// half a unit on each side so a single-value domain maps to the span
    /// midpoint.
    pub fn from_extent(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale extent must be finite".to_owned(),
            ));
        }

        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        Self::new(min.min(max), min.max(max))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> ChartResult<f64> {
        validate_span(span_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * span_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> ChartResult<f64> {
        validate_span(span_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / span_px;
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_span(span_px: f64) -> ChartResult<()> {
    if !span_px.is_finite() || span_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel span must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
