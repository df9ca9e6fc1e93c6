use crate::error::{ChartError, ChartResult};

/// Ordinal label-to-band mapping over an explicit pixel span.
///
/// Bands are equal-height, contiguous, and keep the label order they were
/// constructed with. Used for the month axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
}

impl BandScale {
    pub fn new(labels: Vec<String>) -> ChartResult<Self> {
        if labels.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale needs at least one label".to_owned(),
            ));
        }

        Ok(Self { labels })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn bandwidth(&self, span_px: f64) -> ChartResult<f64> {
        validate_span(span_px)?;
        Ok(span_px / self.labels.len() as f64)
    }

    /// Pixel offset of the band's leading edge.
    pub fn offset(&self, label: &str, span_px: f64) -> ChartResult<f64> {
        let index = self
            .labels
            .iter()
            .position(|candidate| candidate == label)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown band label `{label}`")))?;

        Ok(self.bandwidth(span_px)? * index as f64)
    }

    /// Pixel offset of the band's center, where axis ticks sit.
    pub fn center(&self, label: &str, span_px: f64) -> ChartResult<f64> {
        Ok(self.offset(label, span_px)? + self.bandwidth(span_px)? / 2.0)
    }

    /// Inverse lookup used for hover hit-testing.
    ///
    /// Returns `None` for pixels outside the scale span.
    pub fn label_at_pixel(&self, pixel: f64, span_px: f64) -> ChartResult<Option<&str>> {
        validate_span(span_px)?;
        if !pixel.is_finite() || pixel < 0.0 || pixel >= span_px {
            return Ok(None);
        }

        let index = (pixel / self.bandwidth(span_px)?) as usize;
        Ok(self.labels.get(index).map(String::as_str))
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
