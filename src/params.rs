use std::path::Path;

use crate::error::{Error, Result};
use crate::series::{read_series, Series};

/// Coefficients of `y = slope * x + intercept`, stored in that order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearParams {
    pub fn from_series(path: impl AsRef<Path>, series: &Series) -> Result<Self> {
        let path = path.as_ref();

        let (Some(slope), Some(intercept)) = (series.get(0), series.get(1)) else {
            return Err(Error::MissingParameters {
                path: path.to_path_buf(),
                found: series.len(),
            });
        };

        if series.len() > 2 {
            log::warn!(
                "{} holds {} values, using only the first two",
                path.display(),
                series.len()
            );
        }

        Ok(LinearParams { slope, intercept })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        Self::from_series(path, &read_series(path)?)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predict_series(&self, x: &Series) -> Series {
        Series::from(x.values().mapv(|x| self.predict(x)))
    }
}
