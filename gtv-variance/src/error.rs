//! Failure taxonomy for loading and rendering the variance dataset.
//!
//! Every variant belongs to the same class: the data is unavailable for this
//! render attempt. None of them is retried.

use thiserror::Error;

/// Errors that can occur when fetching, decoding or laying out a dataset.
#[derive(Debug, Error)]
pub enum HeatMapError {
    /// Network failure or a non-success HTTP status.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The document is not JSON or does not have the expected shape.
    #[error("malformed dataset: {0}")]
    Decode(#[from] serde_json::Error),

    /// No records, so no scales can be derived.
    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("record for year {year} has month {month}, expected 1-12")]
    MonthOutOfRange { year: i32, month: u32 },

    #[error("duplicate record for year {year}, month {month}")]
    DuplicateCell { year: i32, month: u32 },
}

impl HeatMapError {
    /// Whether the failure belongs to the data-unavailable class. This is the
    /// only class, so the answer is always yes.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            HeatMapError::Fetch(_)
                | HeatMapError::Decode(_)
                | HeatMapError::EmptyDataset
                | HeatMapError::MonthOutOfRange { .. }
                | HeatMapError::DuplicateCell { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HeatMapError>;
