//! Scales, layout and tooltip state for the temperature variance heat map.
//!
//! This crate turns a [`gtv_variance::dataset::Dataset`] into a
//! [`render::HeatMapView`]: plain positioned marks that a display surface can
//! draw without doing any arithmetic of its own.

pub mod color;
pub mod config;
pub mod render;
pub mod scale;
pub mod tooltip;
