//! The SVG grid of year x month cells.

use crate::components::AxisGroup;
use crate::state::AppState;
use dioxus::prelude::*;
use gtv_data::render::{CellMark, HeatMapView};

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapChartProps {
    /// The laid-out chart; nothing is drawn while it is None
    #[props(!optional)]
    pub view: Option<HeatMapView>,
    /// Inline CSS margin for the SVG surface
    #[props(default = String::new())]
    pub surface_style: String,
}

/// The `.svgContainer` mount point with the grid surface.
///
/// Each render pass replaces the previous SVG wholesale through the vdom diff,
/// so no stale cells or axes survive a new view.
#[component]
pub fn HeatMapChart(props: HeatMapChartProps) -> Element {
    rsx! {
        div {
            class: "svgContainer",
            if let Some(view) = props.view.as_ref() {
                svg {
                    class: "svgHeatMap",
                    width: "{view.width}",
                    height: "{view.height}",
                    style: "{props.surface_style}",
                    g {
                        transform: "{view.plot_transform}",
                        AxisGroup { axis: view.x_axis.clone() }
                        AxisGroup { axis: view.y_axis.clone() }
                        for cell in view.cells.iter() {
                            HeatCell {
                                key: "{cell.year}-{cell.month}",
                                cell: cell.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeatCellProps {
    pub cell: CellMark,
}

/// One cell; hovering it drives the shared tooltip.
#[component]
pub fn HeatCell(props: HeatCellProps) -> Element {
    let mut state = use_context::<AppState>();
    let cell = props.cell;
    let hovered = cell.clone();
    let data_month = cell.data_month();

    let on_enter = move |evt: MouseEvent| {
        let page = evt.page_coordinates();
        state.tooltip.write().enter(&hovered, page.x, page.y);
    };

    let on_leave = move |_evt: MouseEvent| {
        state.tooltip.write().leave();
    };

    rsx! {
        rect {
            class: "cell",
            x: "{cell.x}",
            y: "{cell.y}",
            width: "{cell.width}",
            height: "{cell.height}",
            fill: "{cell.fill}",
            "data-month": "{data_month}",
            "data-year": "{cell.year}",
            "data-temp": "{cell.temperature}",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
        }
    }
}
