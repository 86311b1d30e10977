//! Color legend: evenly spaced swatches plus min/max labels.

use dioxus::prelude::*;
use gtv_data::render::Legend;

#[derive(Props, Clone, PartialEq)]
pub struct LegendStripProps {
    /// Legend for the current view; the container stays empty while None
    #[props(!optional)]
    pub legend: Option<Legend>,
}

#[component]
pub fn LegendStrip(props: LegendStripProps) -> Element {
    rsx! {
        div {
            id: "legend",
            style: "display: flex; justify-content: center;",
            if let Some(legend) = props.legend.as_ref() {
                svg {
                    width: "{legend.width}",
                    height: "{legend.height}",
                    for (index, swatch) in legend.swatches.iter().enumerate() {
                        rect {
                            key: "{index}",
                            width: "{swatch.width}",
                            height: "{swatch.height}",
                            x: "{swatch.x}",
                            fill: "{swatch.fill}",
                        }
                    }
                    for label in legend.labels.iter() {
                        text {
                            key: "{label.text}",
                            x: "{label.x}",
                            y: "{label.y}",
                            text_anchor: "middle",
                            "{label.text}"
                        }
                    }
                }
            }
        }
    }
}
