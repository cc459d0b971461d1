use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Error, Result};
use crate::series::Series;

/// Paired independent/dependent series of equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    x: Series,
    y: Series,
}

impl Dataset {
    pub fn new(x: Series, y: Series) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        Ok(Dataset { x, y })
    }

    pub fn x(&self) -> &Series {
        &self.x
    }

    pub fn y(&self) -> &Series {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.x.iter().zip(self.y.iter())
    }
}

/// y = slope * x + offset + std_dev * Z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseModel {
    pub slope: f64,
    pub offset: f64,
    pub std_dev: f64,
}

impl Default for NoiseModel {
    fn default() -> Self {
        NoiseModel {
            slope: 1.,
            offset: 100.,
            std_dev: 3.,
        }
    }
}

impl NoiseModel {
    pub fn validate(&self) -> Result<()> {
        if !self.std_dev.is_finite() || self.std_dev < 0. {
            return Err(Error::InvalidNoise(format!(
                "standard deviation must be finite and non-negative, got {}",
                self.std_dev
            )));
        }

        if !self.slope.is_finite() || !self.offset.is_finite() {
            return Err(Error::InvalidNoise(format!(
                "slope and offset must be finite, got {} and {}",
                self.slope, self.offset
            )));
        }

        Ok(())
    }

    /// Builds `n` points with x[k] = k, drawing a fresh normal sample for
    /// every index.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Dataset> {
        self.validate()?;

        let mut x = vec![0f64; n];
        let mut y = vec![0f64; n];

        for k in 0..n {
            let z: f64 = StandardNormal.sample(rng);

            x[k] = k as f64;
            y[k] = self.slope * k as f64 + self.std_dev * z + self.offset;
        }

        Dataset::new(Series::from(x), Series::from(y))
    }
}
