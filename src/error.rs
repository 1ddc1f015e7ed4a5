use thiserror::Error;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("metric descriptor key must not be empty")]
    EmptyMetricKey,

    #[error("invalid descriptor for `{key}`: {reason}")]
    InvalidDescriptor { key: String, reason: String },
}
