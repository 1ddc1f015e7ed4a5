//! chartplan: declarative metric visualization planner.
//!
//! This crate turns `(time-indexed data, metric descriptors, chart-type
//! request)` into a fully resolved, renderer-agnostic [`core::RenderPlan`]:
//! which metrics scale against which y-axis, how each series is drawn, how
//! each value is formatted on ticks and in tooltips, and which presentation
//! state (loading / error / empty / ready) applies. Drawing itself is the
//! consumer's concern; the engine never touches a canvas.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PlanEngine, PlanRequest, SeriesSpec, request_fingerprint};
pub use core::{EngineState, RenderPlan};
pub use error::{PlanError, PlanResult};
