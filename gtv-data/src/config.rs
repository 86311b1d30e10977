//! Chart layout configuration.
//!
//! The defaults reproduce the published heat map. The struct is serializable
//! so the effective layout can be logged as JSON at startup.

use serde::{Deserialize, Serialize};

/// Remote location of the monthly global land-surface temperature dataset.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    /// Left edge of the first swatch.
    pub bar_offset: f64,
    /// Total width shared by all swatches.
    pub bar_width: f64,
    /// Number of samples taken along the color scale.
    pub swatch_count: usize,
    pub min_label: String,
    pub max_label: String,
    pub min_label_x: f64,
    pub max_label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    /// Offset from the pointer's page coordinates, in pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    pub fade_in_ms: u32,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub data_url: String,
    pub title: String,
    pub description: String,
    /// Width of the cell grid, excluding margins.
    pub width: f64,
    /// Height of the cell grid, excluding margins.
    pub height: f64,
    pub margin: Margin,
    /// CSS margin around the whole surface.
    pub surface_margin: Margin,
    /// Label every n-th distinct year on the x axis.
    pub year_tick_stride: usize,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 50.0,
            bar_offset: 100.0,
            bar_width: 400.0,
            swatch_count: 11,
            min_label: "Min Value".to_string(),
            max_label: "Max Value".to_string(),
            min_label_x: 50.0,
            max_label_x: 550.0,
            label_y: 30.0,
        }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 20.0,
            offset_y: 20.0,
            fade_in_ms: 500,
            opacity: 0.8,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_string(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
            description: "Heat map of temperature".to_string(),
            width: 1400.0,
            height: 400.0,
            margin: Margin {
                top: 40.0,
                right: 40.0,
                bottom: 40.0,
                left: 60.0,
            },
            surface_margin: Margin {
                top: 110.0,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            },
            year_tick_stride: 5,
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Full SVG width including left and right margins.
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    /// Full SVG height including top and bottom margins.
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    /// Inline CSS margin for the SVG surface.
    pub fn surface_style(&self) -> String {
        let m = &self.surface_margin;
        format!("margin:{}px {}px {}px {}px;", m.top, m.right, m.bottom, m.left)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;

    #[test]
    fn test_default_outer_dimensions() {
        let config = ChartConfig::default();
        assert_eq!(config.outer_width(), 1500.0);
        assert_eq!(config.outer_height(), 480.0);
        assert_eq!(config.surface_style(), "margin:110px 0px 0px 0px;");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = ChartConfig::default().to_json();
        assert!(json.contains("\"yearTickStride\":5"));
        assert!(json.contains("\"fadeInMs\":500"));
        let back: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChartConfig::default());
    }
}
