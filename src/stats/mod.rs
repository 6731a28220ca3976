pub mod anova;
pub mod describe;
pub mod ols;
pub mod ttest;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("group is empty")]
    EmptyGroup,
    #[error("not enough observations: {0}")]
    InsufficientObservations(String),
    #[error("zero variance: {0}")]
    ZeroVariance(String),
    #[error("least squares solver failed: {0}")]
    Solver(String),
    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
}
