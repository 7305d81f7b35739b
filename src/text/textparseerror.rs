use thiserror::Error;

use crate::approximation::approximator::ApproximationError;

#[derive(Debug, Error)]
pub enum TextParseError {
    #[error("line {line}: '{token}' is not a 16-bit integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: '{token}' is not a sample value")]
    InvalidSample { line: usize, token: String },
    #[error("curve {curve}: {source}")]
    Approximation { curve: usize, source: ApproximationError }
}
