//! Flat numeric series files.
//!
//! A series file holds floats separated by newlines, commas or whitespace,
//! with no header row. Writing always produces one value per line in fixed
//! decimal notation with six fractional digits.

use std::path::Path;

use ndarray::Array1;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Series(Array1<f64>);

impl Series {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Series(Array1::from(values))
    }
}

impl From<Array1<f64>> for Series {
    fn from(values: Array1<f64>) -> Self {
        Series(values)
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Series(iter.into_iter().collect())
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.6}", value)
}

pub fn write_series(path: impl AsRef<Path>, series: &Series) -> Result<()> {
    let path = path.as_ref();
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    for value in series.iter() {
        writer.write_record([format_value(value)]).map_err(csv_err)?;
    }

    writer.flush().map_err(|e| Error::io(path, e))?;

    log::debug!("wrote {} values to {}", series.len(), path.display());

    Ok(())
}

pub fn parse_series(path: impl AsRef<Path>, reader: impl std::io::Read) -> Result<Series> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut values = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        // whitespace-only line
        if record.len() == 1 && !record[0].is_empty() && record[0].trim().is_empty() {
            continue;
        }

        for field in record.iter() {
            // a single field may still hold several whitespace separated numbers
            let mut tokens = field.split_whitespace().peekable();

            if tokens.peek().is_none() {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    token: String::new(),
                });
            }

            for token in tokens {
                let value = token.parse::<f64>().map_err(|_| Error::Parse {
                    path: path.to_path_buf(),
                    token: token.to_owned(),
                })?;
                values.push(value);
            }
        }
    }

    Ok(Series::from(values))
}

pub fn read_series(path: impl AsRef<Path>) -> Result<Series> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;

    let series = parse_series(path, file)?;

    log::debug!("read {} values from {}", series.len(), path.display());

    Ok(series)
}
