pub mod band_scale;
pub mod scale;
pub mod threshold_scale;
pub mod types;

pub use band_scale::BandScale;
pub use scale::LinearScale;
pub use threshold_scale::ThresholdScale;
pub use types::{ChartLayout, Margins, Viewport};
