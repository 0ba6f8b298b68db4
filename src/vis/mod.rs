//! Figure rendering
//!
//! Turns a [`crate::stats::TestOutcome`] into the standardized two-panel
//! figure: info panel on top, annotated sampling-distribution plot below.

pub mod config;
pub mod figure;
pub mod format;

pub use config::PlotStyle;
pub use figure::{render_base64, render_png, RenderRequest};
