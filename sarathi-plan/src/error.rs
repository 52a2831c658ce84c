//! Error types for SarathiPlan.

use thiserror::Error;

/// SarathiPlan error type
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("start pose is outside the planning bounds")]
    StartOutOfBounds,

    #[error("goal pose is outside the planning bounds")]
    GoalOutOfBounds,

    #[error("start pose is in collision with an obstacle")]
    StartInCollision,

    #[error("goal pose is in collision with an obstacle")]
    GoalInCollision,

    #[error("no analytic curve connects start to goal")]
    NoAnalyticPath,

    #[error("open set exhausted before reaching the goal")]
    SearchExhausted,

    #[error("node budget of {0} exhausted before reaching the goal")]
    BudgetExhausted(usize),

    #[error("trajectory reconstruction failed: {0}")]
    Reconstruction(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PlanError {
    fn from(e: toml::de::Error) -> Self {
        PlanError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
