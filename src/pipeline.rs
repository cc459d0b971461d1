use rand::Rng;

use crate::config::{GenerateArgs, RenderArgs};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::params::LinearParams;
use crate::plots::save_chart;
use crate::series::{read_series, write_series, Series};

/// Generates the dataset, then writes the raw data image followed by the
/// X and y series.
pub fn generate<R: Rng + ?Sized>(args: &GenerateArgs, rng: &mut R) -> Result<Dataset> {
    let dataset = args.noise_model().generate(args.samples, rng)?;

    log::info!("generated {} samples", dataset.len());

    save_chart(&args.image_path, &dataset, None, "Raw data")?;
    write_series(&args.x_path, dataset.x())?;
    write_series(&args.y_path, dataset.y())?;

    log::info!(
        "wrote {} and {}",
        args.x_path.display(),
        args.y_path.display()
    );

    Ok(dataset)
}

/// Loads data and parameters, failing on any shape problem before drawing,
/// and returns the predicted line that was plotted.
pub fn render(args: &RenderArgs) -> Result<Series> {
    let params = LinearParams::load(&args.params_path)?;
    let dataset = Dataset::new(read_series(&args.x_path)?, read_series(&args.y_path)?)?;

    log::info!(
        "loaded {} points, slope {}, intercept {}",
        dataset.len(),
        params.slope,
        params.intercept
    );

    let predicted = params.predict_series(dataset.x());

    save_chart(
        &args.image_path,
        &dataset,
        Some(&predicted),
        "Linear regression",
    )?;

    Ok(predicted)
}
