//! Chart header component with title and description regions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Text shown under the title
    #[props(default = String::new())]
    pub description: String,
}

/// Header showing the `#title` and `#description` regions.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            div {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 24px; font-weight: bold;",
                "{props.title}"
            }
            div {
                id: "description",
                style: "margin: 0; font-size: 14px; color: #666;",
                "{props.description}"
            }
        }
    }
}
