//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gtv_data::config::ChartConfig;
use gtv_data::tooltip::TooltipController;
use gtv_variance::dataset::Dataset;

/// Shared application state for the heat map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Layout and texts
    pub config: Signal<ChartConfig>,
    /// Loaded dataset (None until the fetch succeeds)
    pub dataset: Signal<Option<Dataset>>,
    /// The single hover tooltip
    pub tooltip: Signal<TooltipController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let config = ChartConfig::default();
        let tooltip = TooltipController::new(config.tooltip.clone());
        Self {
            config: Signal::new(config),
            dataset: Signal::new(None),
            tooltip: Signal::new(tooltip),
        }
    }
}
