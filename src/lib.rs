//! Synthetic linear dataset generation and regression plots.
//!
//! `generate_data` writes `X.txt`, `y.txt` and a scatter of the raw points,
//! an external fitting step turns those into `output.txt` (slope, intercept),
//! and `create_images` overlays the fitted line on the data.

pub mod config;
pub mod dataset;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod plots;
pub mod series;

pub use dataset::{Dataset, NoiseModel};
pub use error::{Error, Result};
pub use params::LinearParams;
pub use series::Series;

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
