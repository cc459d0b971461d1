use std::path::PathBuf;

use clap::Parser;

use crate::dataset::NoiseModel;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a noisy linear dataset", long_about = None)]
pub struct GenerateArgs {
    #[clap(short = 'n', long, default_value_t = 100)]
    pub samples: usize,

    /// Seed for the noise generator, entropy when absent
    #[clap(short, long)]
    pub seed: Option<u64>,

    #[clap(long, default_value_t = 3.0)]
    pub noise_std: f64,

    #[clap(long, default_value_t = 100.0)]
    pub offset: f64,

    #[clap(short, long, default_value = "X.txt")]
    pub x_path: PathBuf,

    #[clap(short, long, default_value = "y.txt")]
    pub y_path: PathBuf,

    #[clap(short, long, default_value = "./images/rawData.png")]
    pub image_path: PathBuf,
}

impl GenerateArgs {
    pub fn noise_model(&self) -> NoiseModel {
        NoiseModel {
            offset: self.offset,
            std_dev: self.noise_std,
            ..Default::default()
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot raw data against a fitted line", long_about = None)]
pub struct RenderArgs {
    #[clap(short, long, default_value = "X.txt")]
    pub x_path: PathBuf,

    #[clap(short, long, default_value = "y.txt")]
    pub y_path: PathBuf,

    /// Slope followed by intercept, as written by the fitting step
    #[clap(short, long, default_value = "output.txt")]
    pub params_path: PathBuf,

    #[clap(short, long, default_value = "./images/regressionLine.png")]
    pub image_path: PathBuf,
}
