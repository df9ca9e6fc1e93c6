use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One monthly record from the temperature document.
///
/// `month` is one-based on the wire; presentation surfaces that need the
/// zero-based form go through [`MonthlyVariance::month_zero_based`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl MonthlyVariance {
    pub fn validate(self) -> ChartResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidData(format!(
                "month {} out of range 1-12 (year {})",
                self.month, self.year
            )));
        }
        if !self.variance.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "variance must be finite (year {}, month {})",
                self.year, self.month
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn month_zero_based(self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Full English month name.
    pub fn month_label(self) -> ChartResult<String> {
        month_label(self.month)
    }
}

/// Full English month name for a one-based month number.
pub fn month_label(month: u32) -> ChartResult<String> {
    let date = chrono::NaiveDate::from_ymd_opt(2000, month, 1).ok_or_else(|| {
        ChartError::InvalidData(format!("month {month} out of range 1-12"))
    })?;
    Ok(date.format("%B").to_string())
}

/// The fetched temperature document: one global base temperature plus the
/// ordered monthly variance records. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl TemperatureDataset {
    /// Parses and validates a JSON temperature document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let dataset: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse temperature document: {e}"))
        })?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.base_temperature.is_finite() {
            return Err(ChartError::InvalidData(
                "base temperature must be finite".to_owned(),
            ));
        }
        if self.monthly_variance.is_empty() {
            return Err(ChartError::InvalidData(
                "temperature document holds no monthly records".to_owned(),
            ));
        }
        for record in &self.monthly_variance {
            record.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Absolute temperature of one record: base plus variance.
    #[must_use]
    pub fn absolute_temperature(&self, record: MonthlyVariance) -> f64 {
        self.base_temperature + record.variance
    }

    /// Inclusive `(min, max)` year extent.
    pub fn year_range(&self) -> ChartResult<(i32, i32)> {
        let years = self.monthly_variance.iter().map(|record| record.year);
        match (years.clone().min(), years.max()) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(ChartError::InvalidData(
                "year range needs at least one record".to_owned(),
            )),
        }
    }

    /// `(min, max)` absolute-temperature extent across all records.
    pub fn temperature_extent(&self) -> ChartResult<(f64, f64)> {
        let temperatures = self
            .monthly_variance
            .iter()
            .map(|record| OrderedFloat(self.absolute_temperature(*record)));
        match (temperatures.clone().min(), temperatures.max()) {
            (Some(min), Some(max)) => Ok((min.into_inner(), max.into_inner())),
            _ => Err(ChartError::InvalidData(
                "temperature extent needs at least one record".to_owned(),
            )),
        }
    }

    /// Distinct month labels in first-occurrence order over the records.
    pub fn month_labels(&self) -> ChartResult<Vec<String>> {
        let mut months: IndexSet<u32> = IndexSet::new();
        for record in &self.monthly_variance {
            months.insert(record.month);
        }

        months.into_iter().map(month_label).collect()
    }
}
