use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::approximation::chebyshevlagrangeapproximator::ChebyshevLagrangeApproximator;
use crate::approximation::directpolynomialapproximator::DirectPolynomialApproximator;
use crate::model::curve::tonecurve::ToneCurve;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApproximationError {
    #[error("least-squares fit failed: {0}")]
    SingularFit(&'static str),
    #[error("interpolation nodes are not distinct")]
    DuplicateNodes,
    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },
    #[error("fitted curve is not finite")]
    NonFiniteFit
}

/// Index of the first NaN or infinite sample.
pub fn first_non_finite(samples: &[f64]) -> Option<usize> {
    samples.iter().position(|s| !s.is_finite())
}

/// Reduces a dense, uniformly spaced sample array to a handful of control points.
///
/// Samples are output levels in [0, 1] at evenly spaced input levels spanning the
/// whole curve.
pub trait CurveApproximator {
    fn name(&self) -> &'static str;

    fn approximate(&self, samples: &[f64]) -> Result<ToneCurve, ApproximationError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproximationStrategy {
    /// Degree-21 fit, Chebyshev nodes, Lagrange coefficient ranking.
    #[default]
    ChebyshevLagrange,
    /// Degree-5 fit read back at evenly spaced inputs, rounded and clamped.
    DirectPolynomial
}

impl ApproximationStrategy {
    pub fn build(&self, number_of_points: usize, fit_degree: usize) -> Box<dyn CurveApproximator> {
        match self {
            ApproximationStrategy::ChebyshevLagrange => {
                Box::new(ChebyshevLagrangeApproximator::new(number_of_points, fit_degree))
            },
            ApproximationStrategy::DirectPolynomial => {
                Box::new(DirectPolynomialApproximator::new(
                    number_of_points,
                    DirectPolynomialApproximator::DEFAULT_DEGREE
                ))
            }
        }
    }

    pub fn parse(name: &str) -> Option<ApproximationStrategy> {
        match name {
            "chebyshev-lagrange" | "chebyshev_lagrange" => Some(ApproximationStrategy::ChebyshevLagrange),
            "direct-polynomial" | "direct_polynomial" => Some(ApproximationStrategy::DirectPolynomial),
            _ => None
        }
    }
}

impl fmt::Display for ApproximationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproximationStrategy::ChebyshevLagrange => write!(f, "chebyshev-lagrange"),
            ApproximationStrategy::DirectPolynomial => write!(f, "direct-polynomial")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in [ApproximationStrategy::ChebyshevLagrange, ApproximationStrategy::DirectPolynomial] {
            assert_eq!(ApproximationStrategy::parse(&strategy.to_string()), Some(strategy));
        }
        assert_eq!(ApproximationStrategy::parse("spline"), None);
    }

    #[test]
    fn strategy_deserializes_from_snake_case() {
        let strategy: ApproximationStrategy = serde_json::from_str("\"direct_polynomial\"").unwrap();
        assert_eq!(strategy, ApproximationStrategy::DirectPolynomial);
    }

    #[test]
    fn build_selects_implementation() {
        assert_eq!(ApproximationStrategy::ChebyshevLagrange.build(16, 21).name(), "chebyshev-lagrange");
        assert_eq!(ApproximationStrategy::DirectPolynomial.build(16, 21).name(), "direct-polynomial");
    }
}
