//! Pure layout: `Dataset` in, positioned marks out.
//!
//! [`render`] computes every coordinate, color and label of the heat map.
//! It never touches a display surface; whoever draws the [`HeatMapView`]
//! owns replacing the previous one.

use crate::color::{interpolate_cividis, Rgb};
use crate::config::{ChartConfig, LegendConfig};
use crate::scale::{BandScale, SequentialScale};
use gtv_utils::months::{self, MONTH_NAMES};
use gtv_utils::numbers::round_thousandths;
use gtv_variance::dataset::{Dataset, DatasetSummary};
use gtv_variance::error::{HeatMapError, Result};
use gtv_variance::record::{FIRST_MONTH, LAST_MONTH};
use serde::Serialize;

/// Length of tick marks and of the outer ends of the axis line.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift that keeps one-pixel strokes crisp.
const CRISP_OFFSET: f64 = 0.5;

/// One record drawn as a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellMark {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
    /// Baseline plus variance, rounded to three decimals.
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

impl CellMark {
    /// Zero-based month, as exposed in the `data-month` attribute.
    pub fn data_month(&self) -> u32 {
        months::zero_based(self.month)
    }

    pub fn tooltip_text(&self) -> String {
        format!(
            "Year: {}, Month: {}, Temp: {}",
            self.year, self.month, self.temperature
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub label: String,
    /// Offset of the tick along the axis, at the center of its band.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Length of the axis line in pixels.
    pub length: f64,
    /// Distance from the grid origin along the cross axis.
    pub cross_offset: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Transform for the axis group inside the plot area.
    pub fn transform(&self) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate(0,{})", self.cross_offset),
            AxisOrient::Left => format!("translate({},0)", self.cross_offset),
        }
    }

    /// SVG path of the axis line with outer tick ends.
    pub fn domain_path(&self) -> String {
        let start = CRISP_OFFSET;
        let end = self.length + CRISP_OFFSET;
        match self.orient {
            AxisOrient::Bottom => {
                format!("M{start},{TICK_SIZE}V{CRISP_OFFSET}H{end}V{TICK_SIZE}")
            }
            AxisOrient::Left => {
                format!("M-{TICK_SIZE},{start}H{CRISP_OFFSET}V{end}H-{TICK_SIZE}")
            }
        }
    }

    pub fn tick_transform(&self, tick: &Tick) -> String {
        let at = tick.offset + CRISP_OFFSET;
        match self.orient {
            AxisOrient::Bottom => format!("translate({at},0)"),
            AxisOrient::Left => format!("translate(0,{at})"),
        }
    }

    /// End point of a tick mark, relative to the tick origin.
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, TICK_SIZE),
            AxisOrient::Left => (-TICK_SIZE, 0.0),
        }
    }

    /// Anchor point of a tick label, relative to the tick origin.
    pub fn label_position(&self) -> (f64, f64) {
        let gap = TICK_SIZE + TICK_PADDING;
        match self.orient {
            AxisOrient::Bottom => (0.0, gap),
            AxisOrient::Left => (-gap, 0.0),
        }
    }

    pub fn label_dy(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "0.71em",
            AxisOrient::Left => "0.32em",
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub width: f64,
    pub height: f64,
    pub swatches: Vec<LegendSwatch>,
    pub labels: Vec<LegendLabel>,
}

/// Everything needed to draw one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatMapView {
    /// Outer SVG size, margins included.
    pub width: f64,
    pub height: f64,
    /// Translation of the plot area inside the SVG.
    pub plot_transform: String,
    pub cells: Vec<CellMark>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    pub summary: DatasetSummary,
}

impl HeatMapView {
    pub fn description(&self) -> String {
        self.summary.description()
    }
}

/// Lay out the heat map for `dataset`.
///
/// Fails with the same error class as a failed load when the dataset cannot
/// produce scales: no records, a month outside 1-12 or a repeated cell.
pub fn render(dataset: &Dataset, config: &ChartConfig) -> Result<HeatMapView> {
    dataset.validate()?;
    let extent = dataset
        .variance_extent()
        .ok_or(HeatMapError::EmptyDataset)?;
    let summary = dataset.summary()?;

    let year_scale = BandScale::new(dataset.records.iter().map(|r| r.year), config.width);
    let month_scale = BandScale::new(dataset.records.iter().map(|r| r.month), config.height);
    if year_scale.is_empty() || month_scale.is_empty() {
        return Err(HeatMapError::EmptyDataset);
    }
    let color_scale = SequentialScale::new(extent, interpolate_cividis);

    // Both band domains are built from these same records, so every lookup hits.
    let cells: Vec<CellMark> = dataset
        .records
        .iter()
        .map(|record| CellMark {
            year: record.year,
            month: record.month,
            variance: record.variance,
            temperature: round_thousandths(record.temperature(dataset.base_temperature)),
            x: year_scale.position(record.year).unwrap_or_default(),
            y: month_scale.position(record.month).unwrap_or_default(),
            width: year_scale.bandwidth(),
            height: month_scale.bandwidth(),
            fill: color_scale.color(record.variance),
        })
        .collect();

    let x_axis = year_axis(&year_scale, config);
    let y_axis = month_axis(config);
    let legend = render_legend(&color_scale, &config.legend);

    log::debug!(
        "[GTV] render: {} cells over {} years x {} months, variance domain [{}, {}]",
        cells.len(),
        year_scale.len(),
        month_scale.len(),
        color_scale.domain().0,
        color_scale.domain().1
    );

    Ok(HeatMapView {
        width: config.outer_width(),
        height: config.outer_height(),
        plot_transform: format!("translate({},{})", config.margin.left, config.margin.top),
        cells,
        x_axis,
        y_axis,
        legend,
        summary,
    })
}

/// Bottom axis labelling every `year_tick_stride`-th distinct year.
fn year_axis(scale: &BandScale<i32>, config: &ChartConfig) -> Axis {
    let stride = config.year_tick_stride.max(1);
    let ticks = scale
        .domain()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride == 0)
        .map(|(_, &year)| Tick {
            label: year.to_string(),
            offset: scale.center(year).unwrap_or_default(),
        })
        .collect();
    Axis {
        id: "x-axis",
        orient: AxisOrient::Bottom,
        length: config.width,
        cross_offset: config.height,
        ticks,
    }
}

/// Left axis with all twelve month names, laid out on a full calendar so the
/// labels do not depend on which months appear in the data.
///
/// Cell rows band only the months present, so with a partial calendar the
/// labels and rows intentionally drift apart; with all twelve they coincide.
fn month_axis(config: &ChartConfig) -> Axis {
    let calendar = BandScale::new(FIRST_MONTH..=LAST_MONTH, config.height);
    let ticks = (FIRST_MONTH..=LAST_MONTH)
        .zip(MONTH_NAMES)
        .map(|(month, name)| Tick {
            label: name.to_string(),
            offset: calendar.center(month).unwrap_or_default(),
        })
        .collect();
    Axis {
        id: "y-axis",
        orient: AxisOrient::Left,
        length: config.height,
        cross_offset: 0.0,
        ticks,
    }
}

/// Evenly spaced swatches sampling the color scale from one end to the other.
pub fn render_legend(scale: &SequentialScale, config: &LegendConfig) -> Legend {
    let count = config.swatch_count;
    let width = if count == 0 {
        0.0
    } else {
        config.bar_width / count as f64
    };
    let last = count.saturating_sub(1).max(1) as f64;
    let swatches = (0..count)
        .map(|i| LegendSwatch {
            x: config.bar_offset + i as f64 * width,
            width,
            height: config.height,
            fill: scale.sample(i as f64 / last),
        })
        .collect();
    let labels = vec![
        LegendLabel {
            x: config.min_label_x,
            y: config.label_y,
            text: config.min_label.clone(),
        },
        LegendLabel {
            x: config.max_label_x,
            y: config.label_y,
            text: config.max_label.clone(),
        },
    ];
    Legend {
        width: config.width,
        height: config.height,
        swatches,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_variance::record::VarianceRecord;

    /// `years` consecutive years starting at 1753, every month present.
    fn full_dataset(years: i32) -> Dataset {
        let records = (0..years)
            .flat_map(|offset| {
                (1..=12).map(move |month| {
                    VarianceRecord::new(1753 + offset, month, (offset * 12 + month as i32) as f64 / 100.0 - 1.0)
                })
            })
            .collect();
        Dataset::new(8.66, records)
    }

    #[test]
    fn test_one_cell_per_record() {
        let dataset = full_dataset(7);
        let view = render(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(view.cells.len(), dataset.len());
    }

    #[test]
    fn test_cell_positions_are_distinct() {
        let view = render(&full_dataset(4), &ChartConfig::default()).unwrap();
        let mut positions: Vec<(u64, u64)> = view
            .cells
            .iter()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), view.cells.len());
    }

    #[test]
    fn test_cell_geometry_uses_bands() {
        let view = render(&full_dataset(4), &ChartConfig::default()).unwrap();
        let cell = view
            .cells
            .iter()
            .find(|c| c.year == 1755 && c.month == 3)
            .unwrap();
        assert_eq!(cell.width, 350.0);
        assert_eq!(cell.height, 400.0 / 12.0);
        assert_eq!(cell.x, 700.0);
        assert_eq!(cell.y, (400.0 / 12.0) * 2.0);
        assert_eq!(cell.data_month(), 2);
    }

    #[test]
    fn test_display_temperature_and_tooltip_text() {
        let dataset = Dataset::new(
            8.0,
            vec![
                VarianceRecord::new(2000, 3, 0.5),
                VarianceRecord::new(2001, 4, -1.2344),
            ],
        );
        let view = render(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(view.cells[0].temperature, 8.5);
        assert_eq!(
            view.cells[0].tooltip_text(),
            "Year: 2000, Month: 3, Temp: 8.5"
        );
        assert_eq!(view.cells[1].temperature, 6.766);
    }

    #[test]
    fn test_color_extremes_map_to_interpolation_endpoints() {
        let dataset = Dataset::new(
            8.66,
            vec![
                VarianceRecord::new(1900, 1, -6.976),
                VarianceRecord::new(1900, 2, 0.0),
                VarianceRecord::new(1901, 1, 5.228),
            ],
        );
        let view = render(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(view.summary.min_variance, -6.976);
        assert_eq!(view.summary.max_variance, 5.228);
        assert_eq!(view.cells[0].fill, interpolate_cividis(0.0));
        assert_eq!(view.cells[2].fill, interpolate_cividis(1.0));
    }

    #[test]
    fn test_year_ticks_every_fifth_year() {
        let view = render(&full_dataset(23), &ChartConfig::default()).unwrap();
        let labels: Vec<&str> = view.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1753", "1758", "1763", "1768", "1773"]);
        assert_eq!(view.x_axis.ticks.len(), (23 + 4) / 5);
        let step = 1400.0 / 23.0;
        assert_eq!(view.x_axis.ticks[1].offset, step * 5.0 + step / 2.0);
    }

    #[test]
    fn test_month_axis_always_has_twelve_labels() {
        let dataset = Dataset::new(
            8.0,
            vec![
                VarianceRecord::new(1900, 6, 0.1),
                VarianceRecord::new(1900, 7, 0.2),
            ],
        );
        let view = render(&dataset, &ChartConfig::default()).unwrap();
        let labels: Vec<&str> = view.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, MONTH_NAMES.to_vec());
        assert!(view.y_axis.ticks.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn test_month_ticks_line_up_with_full_rows() {
        let view = render(&full_dataset(2), &ChartConfig::default()).unwrap();
        for (tick, month) in view.y_axis.ticks.iter().zip(1u32..) {
            let cell = view.cells.iter().find(|c| c.month == month).unwrap();
            assert_eq!(tick.offset, cell.y + cell.height / 2.0);
        }
    }

    #[test]
    fn test_single_year_and_month_fill_the_grid() {
        let dataset = Dataset::new(8.0, vec![VarianceRecord::new(2015, 1, 0.3)]);
        let view = render(&dataset, &ChartConfig::default()).unwrap();
        let cell = &view.cells[0];
        assert_eq!((cell.x, cell.y), (0.0, 0.0));
        assert_eq!((cell.width, cell.height), (1400.0, 400.0));
        assert_eq!(cell.fill, interpolate_cividis(0.5));
        assert_eq!(view.x_axis.ticks.len(), 1);
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let dataset = Dataset::new(8.66, Vec::new());
        assert!(matches!(
            render(&dataset, &ChartConfig::default()),
            Err(HeatMapError::EmptyDataset)
        ));
    }

    #[test]
    fn test_legend_has_eleven_even_swatches() {
        let view = render(&full_dataset(2), &ChartConfig::default()).unwrap();
        let legend = &view.legend;
        assert_eq!(legend.swatches.len(), 11);
        let width = 400.0 / 11.0;
        for (i, swatch) in legend.swatches.iter().enumerate() {
            assert_eq!(swatch.width, width);
            assert_eq!(swatch.x, 100.0 + i as f64 * width);
            assert_eq!(swatch.height, 50.0);
        }
        assert_eq!(legend.swatches[0].fill, interpolate_cividis(0.0));
        assert_eq!(legend.swatches[5].fill, interpolate_cividis(0.5));
        assert_eq!(legend.swatches[10].fill, interpolate_cividis(1.0));
        let texts: Vec<&str> = legend.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Min Value", "Max Value"]);
        assert_eq!((legend.labels[1].x, legend.labels[1].y), (550.0, 30.0));
    }

    #[test]
    fn test_axis_geometry() {
        let view = render(&full_dataset(2), &ChartConfig::default()).unwrap();
        assert_eq!(view.x_axis.transform(), "translate(0,400)");
        assert_eq!(view.x_axis.domain_path(), "M0.5,6V0.5H1400.5V6");
        assert_eq!(view.y_axis.domain_path(), "M-6,0.5H0.5V400.5H-6");
        assert_eq!(view.x_axis.label_position(), (0.0, 9.0));
        assert_eq!(view.y_axis.text_anchor(), "end");
        assert_eq!(view.plot_transform, "translate(60,40)");
        assert_eq!((view.width, view.height), (1500.0, 480.0));
    }
}
