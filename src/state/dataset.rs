//! Time-Series Dataset
//!
//! The `get_data` payload and its conversion into chart series.

use serde_json::Value;

use crate::error::{FetchError, FetchResult};

/// Reserved key holding the shared x-axis
pub const TIME_KEY: &str = "time";

/// A fetched `{"time": [...], "<series>": [...]}` document.
///
/// Series keep the server's key order. Samples that are not numbers are
/// stored as `NaN` and drawn as gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesDataset {
    time: Vec<f64>,
    series: Vec<(String, Vec<f64>)>,
}

impl TimeSeriesDataset {
    /// Build a dataset from a decoded JSON body
    pub fn from_json(value: Value) -> FetchResult<Self> {
        let Value::Object(object) = value else {
            return Err(FetchError::Parse(
                "dataset must be a JSON object".to_string(),
            ));
        };

        let time = object
            .get(TIME_KEY)
            .map(samples)
            .ok_or(FetchError::MissingKey(TIME_KEY))?;

        let series = object
            .iter()
            .filter(|(key, _)| key.as_str() != TIME_KEY)
            .map(|(key, values)| (key.clone(), samples(values)))
            .collect();

        Ok(Self { time, series })
    }

    pub fn new(time: Vec<f64>, series: Vec<(String, Vec<f64>)>) -> Self {
        Self { time, series }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Non-time series in server order
    pub fn series(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

fn samples(value: &Value) -> Vec<f64> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_f64().unwrap_or(f64::NAN))
            .collect(),
        _ => Vec::new(),
    }
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    Lines,
    Markers,
    LinesMarkers,
}

impl SeriesMode {
    pub fn draws_lines(self) -> bool {
        matches!(self, SeriesMode::Lines | SeriesMode::LinesMarkers)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, SeriesMode::Markers | SeriesMode::LinesMarkers)
    }
}

/// One chart trace
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: SeriesMode,
}

impl SeriesDescriptor {
    /// `(x[i], y[i])` pairs; a length mismatch is truncated to the shorter side
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One line-plus-markers descriptor per non-time key
pub fn build_series(dataset: &TimeSeriesDataset) -> Vec<SeriesDescriptor> {
    dataset
        .series()
        .map(|(name, values)| SeriesDescriptor {
            name: name.to_string(),
            x: dataset.time().to_vec(),
            y: values.to_vec(),
            mode: SeriesMode::LinesMarkers,
        })
        .collect()
}
