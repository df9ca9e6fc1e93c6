pub mod dataset;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use dataset::{MonthlyVariance, TemperatureDataset, month_label};

#[cfg(feature = "fetch")]
pub use fetch::{GLOBAL_TEMPERATURE_URL, fetch_global_temperature};
