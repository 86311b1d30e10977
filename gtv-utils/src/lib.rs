//! Shared utility functions for GTV crates.

/// Calendar month helpers
pub mod months {
    /// Month names in calendar order; index 0 is January.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Name of a 1-based calendar month, `None` outside 1-12.
    pub fn month_name(month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_NAMES.get(index).copied()
    }

    /// Zero-based month index as stored in the `data-month` cell attribute.
    pub fn zero_based(month: u32) -> u32 {
        month.saturating_sub(1)
    }

}

/// Number formatting helpers
pub mod numbers {
    /// Round to three decimal places the way `Math.round(x * 1000) / 1000`
    /// does: halves round toward positive infinity.
    pub fn round_thousandths(value: f64) -> f64 {
        (value * 1000.0 + 0.5).floor() / 1000.0
    }

}
