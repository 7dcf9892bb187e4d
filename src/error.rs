use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid range: lower={lower}, upper={upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
