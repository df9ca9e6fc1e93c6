use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Interior breakpoints for the default 11-bucket palette fit inline.
type Breakpoints = SmallVec<[f64; 12]>;

/// Piecewise-constant mapping from a value to one of `bucket_count` buckets.
///
/// Buckets are delimited by `bucket_count - 1` interior breakpoints placed at
/// equal steps across the construction extent. Lookup is bisect-right: a
/// value landing exactly on a breakpoint belongs to the bucket above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    breakpoints: Breakpoints,
}

impl ThresholdScale {
    /// Splits `[min, max]` into `bucket_count` buckets with the step
    /// `(max - min) / bucket_count`.
    pub fn from_extent(min: f64, max: f64, bucket_count: usize) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "threshold extent must be finite and ordered".to_owned(),
            ));
        }
        if bucket_count < 2 {
            return Err(ChartError::InvalidData(
                "threshold scale needs at least two buckets".to_owned(),
            ));
        }

        let step = (max - min) / bucket_count as f64;
        let breakpoints = (1..bucket_count)
            .map(|index| min + step * index as f64)
            .collect();

        Ok(Self { breakpoints })
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.breakpoints.len() + 1
    }

    /// Bucket index for `value` (bisect-right over the breakpoints).
    pub fn bucket_index(&self, value: f64) -> ChartResult<usize> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "threshold lookup value must be finite".to_owned(),
            ));
        }

        Ok(self
            .breakpoints
            .iter()
            .take_while(|breakpoint| **breakpoint <= value)
            .count())
    }

    /// Value extent covered by a bucket.
    ///
    /// The first bucket has no lower bound and the last bucket no upper
    /// bound; callers clamp open ends to their data extent.
    pub fn bucket_extent(&self, index: usize) -> ChartResult<(Option<f64>, Option<f64>)> {
        if index >= self.bucket_count() {
            return Err(ChartError::InvalidData(format!(
                "bucket index {index} out of range for {} buckets",
                self.bucket_count()
            )));
        }

        let lower = index.checked_sub(1).map(|i| self.breakpoints[i]);
        let upper = self.breakpoints.get(index).copied();
        Ok((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::ThresholdScale;

    #[test]
    fn breakpoints_are_equally_stepped() {
        let scale = ThresholdScale::from_extent(0.0, 11.0, 11).expect("valid scale");
        let breakpoints = scale.breakpoints();

        assert_eq!(breakpoints.len(), 10);
        for (index, breakpoint) in breakpoints.iter().enumerate() {
            assert!((breakpoint - (index + 1) as f64).abs() <= 1e-12);
        }
    }

    #[test]
    fn value_on_breakpoint_lands_in_upper_bucket() {
        let scale = ThresholdScale::from_extent(0.0, 10.0, 10).expect("valid scale");
        assert_eq!(scale.bucket_index(1.0).expect("lookup"), 1);
        assert_eq!(scale.bucket_index(0.999).expect("lookup"), 0);
    }

    #[test]
    fn flat_extent_sends_shared_breakpoint_to_last_bucket() {
        let scale = ThresholdScale::from_extent(7.5, 7.5, 11).expect("valid scale");
        assert_eq!(scale.bucket_index(7.5).expect("lookup"), 10);
    }
}
