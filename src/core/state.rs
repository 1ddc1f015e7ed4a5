use serde::{Deserialize, Serialize};

use super::plan::RenderPlan;
use super::types::EmptyStateConfig;

/// Presentation state resolved for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Loading,
    Error {
        message: String,
        /// Whether the caller wired a retry affordance; retrying itself is
        /// entirely the caller's responsibility.
        retry_available: bool,
    },
    Empty(EmptyStateConfig),
    Ready(RenderPlan),
}

impl EngineState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn plan(&self) -> Option<&RenderPlan> {
        match self {
            Self::Ready(plan) => Some(plan),
            _ => None,
        }
    }
}

/// Evaluates the short-circuit conditions in strict priority order:
/// loading, then error, then empty data.
///
/// Returns `None` when none apply and planning should proceed to a
/// `Ready` state. Pure and total: the classification depends only on the
/// arguments, never on prior calls.
#[must_use]
pub fn resolve_short_circuit(
    loading: bool,
    error: Option<&str>,
    retry_available: bool,
    data_len: usize,
    empty_state: &EmptyStateConfig,
) -> Option<EngineState> {
    if loading {
        return Some(EngineState::Loading);
    }
    if let Some(message) = error {
        return Some(EngineState::Error {
            message: message.to_owned(),
            retry_available,
        });
    }
    if data_len == 0 {
        return Some(EngineState::Empty(empty_state.clone()));
    }
    None
}
