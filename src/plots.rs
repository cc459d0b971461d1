use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::series::Series;

/// 20x10 figure at 100 dpi.
pub const CANVAS_SIZE: (u32, u32) = (2000, 1000);

const POINT_SIZE: u32 = 4;

pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn find_max_min<T: std::cmp::PartialOrd + Copy>(
    mut data: impl Iterator<Item = T>,
) -> Option<MinMax<T>> {
    let init = data.next()?;

    Some(data.fold(MinMax { min: init, max: init }, |acc, x| MinMax {
        min: if x < acc.min { x } else { acc.min },
        max: if x > acc.max { x } else { acc.max },
    }))
}

fn padded_range(data: impl Iterator<Item = f64>) -> Range<f64> {
    let Some(MinMax { min, max }) = find_max_min(data.filter(|v| v.is_finite())) else {
        return 0.0..1.0;
    };

    let span = max - min;
    if span <= 0. {
        return (min - 1.)..(max + 1.);
    }

    let pad = span * 0.05;
    (min - pad)..(max + pad)
}

/// Scatter of `dataset`, optionally overlaid with `line` drawn over the same
/// x values. Text (caption, axis labels, legend) is only drawn when `text` is
/// set, since bitmap output has no font available.
pub fn render_chart<DB>(
    dataset: &Dataset,
    line: Option<&Series>,
    caption: &str,
    text: bool,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<()>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    if let Some(line) = line {
        if line.len() != dataset.len() {
            return Err(Error::LengthMismatch {
                x: dataset.len(),
                y: line.len(),
            });
        }
    }

    let x_range = padded_range(dataset.x().iter());
    let y_range = padded_range(
        dataset
            .y()
            .iter()
            .chain(line.into_iter().flat_map(|l| l.iter())),
    );

    log::debug!("chart ranges x: {:?}, y: {:?}", x_range, y_range);

    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(drawing_area);
    chart_builder.margin(50);

    if text {
        chart_builder
            .caption(caption, ("sans-serif", 30))
            .set_all_label_area_size(70);
    }

    let mut chart_context = chart_builder.build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart_context.configure_mesh();
    mesh.x_labels(10).y_labels(10);
    if text {
        mesh.x_desc("x").y_desc("y");
    }
    mesh.draw()?;

    let points = chart_context.draw_series(
        dataset
            .points()
            .map(|p| Circle::new(p, POINT_SIZE, full_palette::BLUE.filled())),
    )?;

    if text {
        points
            .label("data")
            .legend(|(x, y)| Circle::new((x, y), POINT_SIZE, full_palette::BLUE.filled()));
    }

    if let Some(line) = line {
        let fitted = chart_context.draw_series(LineSeries::new(
            dataset.x().iter().zip(line.iter()),
            full_palette::ORANGE.stroke_width(3),
        ))?;

        if text {
            fitted.label("fitted line").legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], full_palette::ORANGE)
            });
        }
    }

    if text {
        chart_context
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE)
            .draw()?;
    }

    Ok(())
}

/// Writes the chart to `path`: SVG when the extension is `svg`, otherwise a
/// bitmap encoded from the extension (png by default paths).
pub fn save_chart(
    path: impl AsRef<Path>,
    dataset: &Dataset,
    line: Option<&Series>,
    caption: &str,
) -> Result<()> {
    let path = path.as_ref();

    // plotters would fail on present(), report it up front instead
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(Error::MissingDirectory(parent.to_path_buf()));
        }
    }

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let drawing_area = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
        render_chart(dataset, line, caption, true, &drawing_area)?;
        drawing_area.present()?;
    } else {
        let drawing_area = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        render_chart(dataset, line, caption, false, &drawing_area)?;
        drawing_area.present()?;
    }

    log::info!("saved chart to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::params::LinearParams;

    const SMALL: (u32, u32) = (200, 100);

    fn render_to_buffer(dataset: &Dataset, line: Option<&Series>) -> Vec<u8> {
        let mut buffer = vec![0u8; (SMALL.0 * SMALL.1 * 3) as usize];
        {
            let drawing_area = BitMapBackend::with_buffer(&mut buffer, SMALL).into_drawing_area();
            render_chart(dataset, line, "test", false, &drawing_area).unwrap();
            drawing_area.present().unwrap();
        }
        buffer
    }

    fn sample() -> (Dataset, Series) {
        let dataset = Dataset::new(
            Series::from(vec![0., 1., 2., 3.]),
            Series::from(vec![100., 102., 101., 104.]),
        )
        .unwrap();
        let line = LinearParams {
            slope: 1.,
            intercept: 100.,
        }
        .predict_series(dataset.x());

        (dataset, line)
    }

    #[test]
    fn min_max_of_values() {
        let MinMax { min, max } = find_max_min([3., -1., 7., 2.].into_iter()).unwrap();

        assert_eq!((min, max), (-1., 7.));
        assert!(find_max_min(std::iter::empty::<f64>()).is_none());
    }

    #[test]
    fn degenerate_range_widened() {
        assert_eq!(padded_range([5., 5.].into_iter()), 4.0..6.0);
        assert_eq!(padded_range(std::iter::empty()), 0.0..1.0);

        let range = padded_range([0., 100.].into_iter());
        assert_eq!(range, -5.0..105.0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let (dataset, line) = sample();

        let first = render_to_buffer(&dataset, Some(&line));
        let second = render_to_buffer(&dataset, Some(&line));

        assert_eq!(first, second);
        assert!(first.iter().any(|&b| b != 255), "nothing was drawn");
    }

    #[test]
    fn line_changes_the_image() {
        let (dataset, line) = sample();

        assert_ne!(
            render_to_buffer(&dataset, None),
            render_to_buffer(&dataset, Some(&line))
        );
    }

    #[test]
    fn line_length_must_match() {
        let (dataset, _) = sample();
        let short = Series::from(vec![1., 2.]);

        let mut buffer = vec![0u8; (SMALL.0 * SMALL.1 * 3) as usize];
        let drawing_area = BitMapBackend::with_buffer(&mut buffer, SMALL).into_drawing_area();

        assert!(matches!(
            render_chart(&dataset, Some(&short), "test", false, &drawing_area),
            Err(Error::LengthMismatch { x: 4, y: 2 })
        ));
    }

    #[test]
    fn missing_directory_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let (dataset, _) = sample();
        let target = dir.path().join("images").join("rawData.png");

        assert!(matches!(
            save_chart(&target, &dataset, None, "raw data"),
            Err(Error::MissingDirectory(_))
        ));
        assert!(!dir.path().join("images").exists());
    }

    #[test]
    fn backend_failure_keeps_its_source() {
        let dir = tempfile::tempdir().unwrap();
        let (dataset, _) = sample();

        // a directory where the image file should go
        let target = dir.path().join("chart.png");
        std::fs::create_dir(&target).unwrap();

        let err = save_chart(&target, &dataset, None, "raw data").unwrap_err();

        assert!(matches!(err, Error::Plot(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn writes_png_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let (dataset, line) = sample();

        let png = dir.path().join("chart.png");
        save_chart(&png, &dataset, Some(&line), "regression").unwrap();
        let bytes = std::fs::read(&png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let svg = dir.path().join("chart.svg");
        save_chart(&svg, &dataset, Some(&line), "regression").unwrap();
        let content = std::fs::read_to_string(&svg).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("regression"));
    }
}
