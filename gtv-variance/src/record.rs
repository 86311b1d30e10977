use serde::{Deserialize, Serialize};

/// First and last valid month indices (January = 1).
pub const FIRST_MONTH: u32 = 1;
pub const LAST_MONTH: u32 = 12;

/// One monthly temperature deviation from the dataset baseline.
///
/// A record is identified by its `(year, month)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Deviation in °C from the base temperature.
    pub variance: f64,
}

impl VarianceRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// The `(year, month)` identity of this record.
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn has_valid_month(&self) -> bool {
        (FIRST_MONTH..=LAST_MONTH).contains(&self.month)
    }

    /// Absolute temperature for this month: baseline plus deviation.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        self.variance + base_temperature
    }
}
