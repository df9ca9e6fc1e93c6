mod annotations;
mod axes;
mod cells;
mod config;
mod engine;
mod frame_builder;
mod legend;

pub use config::{DEFAULT_PALETTE, HeatmapConfig};
pub use engine::HeatmapEngine;
