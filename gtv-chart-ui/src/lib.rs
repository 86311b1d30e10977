//! Shared Dioxus components and browser data loader for the GTV heat map.
//!
//! This crate provides:
//! - `loader`: the single `fetch` of the remote variance dataset
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components drawing a `HeatMapView` (grid, axes, legend, tooltip)

pub mod loader;
pub mod state;
pub mod components;
