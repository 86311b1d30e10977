//! Monthly Global Land-Surface Temperature heat map
//!
//! Draws one cell per (year, month) colored by the deviation from the base
//! temperature, with hover tooltips and a color legend.
//!
//! Data flow:
//! 1. On mount: GET the variance JSON once (no retry, no polling).
//! 2. On success: store the dataset in `AppState`; on failure: log and leave
//!    the chart surfaces empty.
//! 3. A memo lays the dataset out into a `HeatMapView`; the components draw
//!    it and the vdom diff replaces whatever was drawn before.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use gtv_chart_ui::components::{ChartHeader, HeatMapChart, LegendStrip, Tooltip};
use gtv_chart_ui::loader;
use gtv_chart_ui::state::AppState;
use gtv_data::render::{render, HeatMapView};

/// DOM id of the element the app mounts into (see `index.html`).
const ROOT_ID: &str = "heat-map-root";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting heat map application");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: fetch the dataset once on mount ───
    // `peek` keeps this effect from subscribing to config changes.
    use_effect(move || {
        let config = state.config.peek().clone();
        info!("[GTV] chart config: {}", config.to_json());
        spawn(async move {
            match loader::fetch_dataset(&config.data_url).await {
                Ok(dataset) => state.dataset.set(Some(dataset)),
                Err(e) if e.is_data_unavailable() => {
                    error!("[GTV] loader: {} (data unavailable, nothing rendered)", e)
                }
                Err(e) => error!("[GTV] loader: {}", e),
            }
        });
    });

    // ─── Memo: lay out the current dataset ───
    let view = use_memo(move || -> Option<HeatMapView> {
        let config = state.config.read();
        let dataset = state.dataset.read();
        let dataset = dataset.as_ref()?;
        match render(dataset, &config) {
            Ok(view) => {
                info!("[GTV] render: drew {} cells", view.cells.len());
                Some(view)
            }
            Err(e) => {
                error!("[GTV] render: {}", e);
                None
            }
        }
    });

    let config = state.config.read().clone();
    let current = view();
    let description = current
        .as_ref()
        .map(HeatMapView::description)
        .unwrap_or_else(|| config.description.clone());
    let legend = current.as_ref().map(|v| v.legend.clone());

    // ─── Render ───
    rsx! {
        div {
            style: "margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            Tooltip {}

            ChartHeader {
                title: config.title.clone(),
                description: description,
            }

            HeatMapChart {
                view: current,
                surface_style: config.surface_style(),
            }

            LegendStrip { legend: legend }
        }
    }
}
