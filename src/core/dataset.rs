use std::io::Read;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Source of the cars dataset used by the default tour.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/vega/vega-datasets/master/data/cars.json";

/// One vehicle observation with both plotted attributes present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub name: String,
    pub horsepower: f64,
    pub miles_per_gallon: f64,
}

impl CarRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, horsepower: f64, miles_per_gallon: f64) -> Self {
        Self {
            name: name.into(),
            horsepower,
            miles_per_gallon,
        }
    }
}

/// Wire shape of one source row. Other source columns are ignored.
#[derive(Debug, Deserialize)]
struct RawCarRecord {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Horsepower", default)]
    horsepower: Option<f64>,
    #[serde(rename = "Miles_per_Gallon", default)]
    miles_per_gallon: Option<f64>,
}

impl RawCarRecord {
    fn into_record(self) -> Option<CarRecord> {
        let horsepower = self.horsepower.filter(|value| value.is_finite())?;
        let miles_per_gallon = self.miles_per_gallon.filter(|value| value.is_finite())?;
        Some(CarRecord {
            name: self.name.unwrap_or_default(),
            horsepower,
            miles_per_gallon,
        })
    }
}

/// Upper bounds of the plotted attributes; scales span `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataDomain {
    pub max_horsepower: f64,
    pub max_miles_per_gallon: f64,
}

/// Immutable working dataset.
///
/// Every record is guaranteed to carry finite horsepower and mpg values;
/// rows missing either are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CarRecord>,
}

impl Dataset {
    /// Keeps only records with finite plotted attributes.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CarRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| record.horsepower.is_finite() && record.miles_per_gallon.is_finite())
            .collect();
        Self { records }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: Vec<RawCarRecord> = serde_json::from_str(input)
            .map_err(|e| ChartError::DatasetLoad(format!("failed to parse dataset json: {e}")))?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader(reader: impl Read) -> ChartResult<Self> {
        let raw: Vec<RawCarRecord> = serde_json::from_reader(reader)
            .map_err(|e| ChartError::DatasetLoad(format!("failed to read dataset json: {e}")))?;
        Ok(Self::from_raw(raw))
    }

    /// Downloads and parses the dataset at `url`.
    #[cfg(feature = "fetch")]
    pub fn fetch(url: &str) -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(12))
            .build()
            .map_err(|e| ChartError::DatasetLoad(format!("http client error: {e}")))?;
        let raw: Vec<RawCarRecord> = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ChartError::DatasetLoad(format!("request to `{url}` failed: {e}")))?
            .json()
            .map_err(|e| ChartError::DatasetLoad(format!("dataset decode error: {e}")))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: Vec<RawCarRecord>) -> Self {
        let total = raw.len();
        let records: Vec<CarRecord> = raw
            .into_iter()
            .filter_map(RawCarRecord::into_record)
            .collect();
        debug!(
            total,
            kept = records.len(),
            dropped = total - records.len(),
            "dataset loaded"
        );
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[CarRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CarRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum horsepower and mpg; `0.0` for an empty dataset.
    #[must_use]
    pub fn domain(&self) -> DataDomain {
        let max_of = |value: fn(&CarRecord) -> f64| {
            self.records
                .iter()
                .map(|record| OrderedFloat(value(record)))
                .max()
                .map_or(0.0, |max| max.0)
        };
        DataDomain {
            max_horsepower: max_of(|record| record.horsepower),
            max_miles_per_gallon: max_of(|record| record.miles_per_gallon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_with_missing_fields_are_dropped() {
        let json = r#"[
            {"Name": "a", "Horsepower": 130, "Miles_per_Gallon": 18, "Cylinders": 8},
            {"Name": "b", "Horsepower": null, "Miles_per_Gallon": 25},
            {"Name": "c", "Horsepower": 95, "Miles_per_Gallon": null},
            {"Name": "d", "Miles_per_Gallon": 30}
        ]"#;
        let dataset = Dataset::from_json_str(json).expect("parse");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0], CarRecord::new("a", 130.0, 18.0));
    }

    #[test]
    fn malformed_payload_is_a_load_error() {
        let err = Dataset::from_json_str("{\"not\": \"an array\"}").expect_err("must fail");
        assert!(matches!(err, ChartError::DatasetLoad(_)));
    }

    #[test]
    fn domain_uses_attribute_maxima() {
        let dataset = Dataset::from_records([
            CarRecord::new("a", 100.0, 35.0),
            CarRecord::new("b", 200.0, 20.0),
        ]);
        let domain = dataset.domain();
        assert_eq!(domain.max_horsepower, 200.0);
        assert_eq!(domain.max_miles_per_gallon, 35.0);
    }

    #[test]
    fn empty_dataset_has_zero_domain() {
        let domain = Dataset::default().domain();
        assert_eq!(domain.max_horsepower, 0.0);
        assert_eq!(domain.max_miles_per_gallon, 0.0);
    }

    #[test]
    fn non_finite_records_are_filtered() {
        let dataset = Dataset::from_records([
            CarRecord::new("a", f64::NAN, 35.0),
            CarRecord::new("b", 200.0, 20.0),
        ]);
        assert_eq!(dataset.len(), 1);
    }
}
