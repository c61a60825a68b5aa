use client::ApiError;
use shared::ValidationError;
use thiserror::Error;

use crate::assert::AssertionError;
use crate::config::ConfigError;

/// Why a scenario failed. Any of these ends the scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A call that was not wrapped in `expect_error` was rejected.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scenario took {elapsed:?}, budget is {budget:?}")]
    OverBudget {
        elapsed: std::time::Duration,
        budget: std::time::Duration,
    },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
