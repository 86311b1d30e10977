//! One chart axis: domain line, tick marks and labels.

use dioxus::prelude::*;
use gtv_data::render::Axis;

#[derive(Props, Clone, PartialEq)]
pub struct AxisGroupProps {
    pub axis: Axis,
}

#[component]
pub fn AxisGroup(props: AxisGroupProps) -> Element {
    let axis = &props.axis;
    let transform = axis.transform();
    let domain = axis.domain_path();
    let (line_x, line_y) = axis.tick_line_end();
    let (label_x, label_y) = axis.label_position();
    let dy = axis.label_dy();
    let anchor = axis.text_anchor();

    rsx! {
        g {
            id: "{axis.id}",
            class: "tick",
            transform: "{transform}",
            fill: "none",
            font_size: "10",
            font_family: "sans-serif",
            path { class: "domain", stroke: "currentColor", d: "{domain}" }
            for tick in axis.ticks.iter() {
                g {
                    key: "{tick.label}",
                    class: "tick",
                    opacity: "1",
                    transform: axis.tick_transform(tick),
                    line { stroke: "currentColor", x2: "{line_x}", y2: "{line_y}" }
                    text {
                        fill: "currentColor",
                        x: "{label_x}",
                        y: "{label_y}",
                        dy: "{dy}",
                        text_anchor: "{anchor}",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
