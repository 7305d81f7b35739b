use crate::approximation::approximator::{
    first_non_finite,
    ApproximationError,
    CurveApproximator
};
use crate::math::curve::curve::Curve;
use crate::math::curve::parametriccurve::polynomial::{
    linspace,
    Polynomial
};
use crate::math::round::round_half_even;
use crate::model::curve::controlpoint::ControlPoint;
use crate::model::curve::tonecurve::ToneCurve;

/// Fits a low-degree polynomial to the samples over x_i = i/N and reads it back
/// at evenly spaced inputs.
///
/// Both coordinates are scaled to 0..=255, rounded half to even and clamped.
pub struct DirectPolynomialApproximator {
    number_of_points: usize,
    degree: usize
}

impl DirectPolynomialApproximator {
    pub const DEFAULT_POINTS: usize = 16;
    pub const DEFAULT_DEGREE: usize = 5;

    pub fn new(number_of_points: usize, degree: usize) -> DirectPolynomialApproximator {
        DirectPolynomialApproximator { number_of_points, degree }
    }

    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    fn to_point(x: f64, y: f64) -> ControlPoint {
        let level = ControlPoint::MAX_LEVEL as f64;
        ControlPoint::clamped(round_half_even(x * level, 0), round_half_even(y * level, 0))
    }
}

impl Default for DirectPolynomialApproximator {
    fn default() -> DirectPolynomialApproximator {
        DirectPolynomialApproximator::new(Self::DEFAULT_POINTS, Self::DEFAULT_DEGREE)
    }
}

impl CurveApproximator for DirectPolynomialApproximator {
    fn name(&self) -> &'static str {
        "direct-polynomial"
    }

    fn approximate(&self, samples: &[f64]) -> Result<ToneCurve, ApproximationError> {
        if let Some(index) = first_non_finite(samples) {
            return Err(ApproximationError::NonFiniteSample { index });
        }
        let n = samples.len();
        if n == 0 || self.number_of_points == 0 {
            return Ok(ToneCurve::default());
        }
        if n == 1 {
            return Ok(ToneCurve::new(vec![Self::to_point(0.0, samples[0])]));
        }

        let x_values: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
        let degree = self.degree.min(n - 1);
        let fitted = Polynomial::fit_least_squares(&x_values, samples, degree)
            .map_err(ApproximationError::SingularFit)?;

        let points = linspace(x_values[0], x_values[n - 1], self.number_of_points)
            .into_iter()
            .map(|x| Self::to_point(x, fitted.value(x)))
            .collect();

        log::debug!("{}: {} samples, degree {} fit", self.name(), n, degree);
        Ok(ToneCurve::new(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
    }

    #[test]
    fn identity_ramp_endpoints() {
        let curve = DirectPolynomialApproximator::default().approximate(&ramp(256)).unwrap();
        assert_eq!(curve.len(), 16);
        assert_eq!(curve.points()[0], ControlPoint::new(0, 0));
        // inputs stop at 255/256 of the range
        assert_eq!(curve.points()[15], ControlPoint::new(254, 255));
        assert!(curve.points().windows(2).all(|w| w[0].x() < w[1].x() && w[0].y() <= w[1].y()));
    }

    #[test]
    fn overshoot_is_clamped() {
        let samples: Vec<f64> = ramp(256).iter().map(|t| 1.5 * t - 0.25).collect();
        let curve = DirectPolynomialApproximator::default().approximate(&samples).unwrap();
        assert!(curve.points().iter().all(|p| p.is_in_range()));
        assert_eq!(curve.points()[0].y(), 0);
        assert_eq!(curve.points()[15].y(), 255);
    }

    #[test]
    fn never_emits_more_than_requested() {
        let approximator = DirectPolynomialApproximator::default();
        for n in [22, 50, 256, 777] {
            assert!(approximator.approximate(&ramp(n)).unwrap().len() <= 16);
        }
    }

    #[test]
    fn degenerate_inputs() {
        let approximator = DirectPolynomialApproximator::default();
        assert!(approximator.approximate(&[]).unwrap().is_empty());
        assert_eq!(
            approximator.approximate(&[2.0]).unwrap().points(),
            &[ControlPoint::new(0, 255)]
        );
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let mut samples = ramp(256);
        samples[7] = f64::NAN;
        assert_eq!(
            DirectPolynomialApproximator::default().approximate(&samples),
            Err(ApproximationError::NonFiniteSample { index: 7 })
        );
    }
}
