//! Reusable Dioxus RSX components for the GTV heat map.

mod axis;
mod chart_header;
mod heat_map_chart;
mod legend_strip;
mod tooltip;

pub use axis::AxisGroup;
pub use chart_header::ChartHeader;
pub use heat_map_chart::{HeatCell, HeatMapChart};
pub use legend_strip::LegendStrip;
pub use tooltip::Tooltip;
