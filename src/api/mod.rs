pub mod engine;
pub mod fingerprint;

pub use engine::{PlanEngine, PlanFlags, PlanRequest, SeriesSpec};
pub use fingerprint::request_fingerprint;
