use thiserror::Error;

/// Non-fatal diagnostics raised while building a curve set. A conversion with
/// warnings still produces output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CurveWarning {
    #[error("curve {curve} has {points} points, more than the {limit} the curve consumer accepts")]
    PointLimitExceeded { curve: usize, points: usize, limit: usize },
    #[error("curve {curve} has point ({x}, {y}) outside 0..=255")]
    PointOutOfRange { curve: usize, x: i16, y: i16 },
    #[error("curve {curve} declares {declared} samples but lists {actual}")]
    SampleCountMismatch { curve: usize, declared: usize, actual: usize },
    #[error("line {line}: unpaired trailing value {value} ignored")]
    DanglingValue { line: usize, value: i16 }
}
