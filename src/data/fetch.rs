use std::time::Duration;

use tracing::debug;

use crate::data::TemperatureDataset;
use crate::error::ChartResult;

/// Canonical source of the monthly global land-surface temperature document.
pub const GLOBAL_TEMPERATURE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Issues the single blocking GET for the temperature document and decodes it.
///
/// There is no retry: a transport or decode failure surfaces as one
/// `ChartError` and the caller decides whether anything gets rendered.
pub fn fetch_global_temperature(url: &str) -> ChartResult<TemperatureDataset> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())?
        .text()?;

    debug!(bytes = body.len(), url, "fetched temperature document");
    TemperatureDataset::from_json_str(&body)
}
