//! The monthly variance dataset and its JSON wire format.
//!
//! The remote document looks like:
//!
//! ```text
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [
//!     { "year": 1753, "month": 1, "variance": -1.366 },
//!     ...
//!   ]
//! }
//! ```

use crate::error::{HeatMapError, Result};
use crate::record::VarianceRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A baseline temperature plus the ordered monthly deviations from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<VarianceRecord>,
}

/// Headline numbers about a dataset, used for the description text and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub base_temperature: f64,
    pub min_variance: f64,
    pub max_variance: f64,
}

impl Dataset {
    pub fn new(base_temperature: f64, records: Vec<VarianceRecord>) -> Self {
        Self {
            base_temperature,
            records,
        }
    }

    /// Decode and validate a dataset from the remote JSON document.
    ///
    /// Fails on malformed JSON, a missing field, an empty record list, a month
    /// outside 1-12 or a repeated `(year, month)` pair.
    pub fn from_json(body: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(body)?;
        dataset.validate()?;
        log::info!(
            "[GTV] dataset: decoded {} records (base temperature {})",
            dataset.records.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    /// Check the invariants every renderable dataset must hold.
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(HeatMapError::EmptyDataset);
        }
        let mut seen: HashSet<(i32, u32)> = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if !record.has_valid_month() {
                return Err(HeatMapError::MonthOutOfRange {
                    year: record.year,
                    month: record.month,
                });
            }
            if !seen.insert(record.key()) {
                return Err(HeatMapError::DuplicateCell {
                    year: record.year,
                    month: record.month,
                });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct years in ascending order.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct months in ascending order.
    pub fn distinct_months(&self) -> Vec<u32> {
        self.records
            .iter()
            .map(|r| r.month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(min, max)` of the variance across every record, `None` when empty.
    pub fn variance_extent(&self) -> Option<(f64, f64)> {
        self.records.iter().map(|r| r.variance).fold(None, |acc, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }

    pub fn summary(&self) -> Result<DatasetSummary> {
        let (min_variance, max_variance) =
            self.variance_extent().ok_or(HeatMapError::EmptyDataset)?;
        let years = self.distinct_years();
        let (first_year, last_year) = match (years.first(), years.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(HeatMapError::EmptyDataset),
        };
        Ok(DatasetSummary {
            record_count: self.records.len(),
            first_year,
            last_year,
            base_temperature: self.base_temperature,
            min_variance,
            max_variance,
        })
    }
}

impl DatasetSummary {
    /// One-line description shown under the chart title.
    pub fn description(&self) -> String {
        format!(
            "{}-{}: base temperature {}℃",
            self.first_year, self.last_year, self.base_temperature
        )
    }
}
