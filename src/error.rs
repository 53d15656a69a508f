use thiserror::Error;

use crate::api::ConfigProblem;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("axis section must not be empty")]
    EmptySection,

    #[error("axis configuration has {} problem(s)", .problems.len())]
    Configuration { problems: Vec<ConfigProblem> },
}
