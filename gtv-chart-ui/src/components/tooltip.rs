//! Floating hover label bound to the shared `TooltipController`.

use crate::state::AppState;
use dioxus::prelude::*;

/// The `#tooltip` anchor element. It stays in layout while hidden; the
/// controller's style hides it, so the opacity fade has a frame to start from.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read().clone();
    let hidden = if tooltip.is_visible() { "false" } else { "true" };
    let style = tooltip.style();
    let year = tooltip.data_year();
    let text = tooltip.text().to_string();

    rsx! {
        div {
            id: "tooltip",
            "aria-hidden": "{hidden}",
            style: "{style}",
            "data-year": "{year}",
            "{text}"
        }
    }
}
