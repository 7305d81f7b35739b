use crate::approximation::approximator::{
    first_non_finite,
    ApproximationError,
    CurveApproximator
};
use crate::math::chebyshev::chebyshev_nodes;
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::lagrangepolynomial::LagrangePolynomial;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::curve::parametriccurve::polynomial::Polynomial;
use crate::model::curve::controlpoint::ControlPoint;
use crate::model::curve::tonecurve::ToneCurve;

// ─────────────────────────────────────────────────────────────────────────────
// ChebyshevLagrangeApproximator
// ─────────────────────────────────────────────────────────────────────────────
//
//   1. y_i = 255·s_i, fitted by a degree-21 least-squares polynomial p over the
//      sample index i = 0..N-1
//   2. n Chebyshev nodes c_k over [0, N-1], ascending
//   3. Lagrange polynomial L through (c_k, p(c_k))
//   4. keep the nodes whose monomial coefficient of L (highest degree first)
//      ranks among the n largest in magnitude; with n nodes that is all of them
//   5. (255·c_k/(N-1), L(c_k)) truncated toward zero
//
// Fitted points are not clamped: a fit that overshoots [0, 255] is passed on
// and reported by the caller.

pub struct ChebyshevLagrangeApproximator {
    number_of_points: usize,
    fit_degree: usize
}

impl ChebyshevLagrangeApproximator {
    pub const DEFAULT_POINTS: usize = 16;
    pub const DEFAULT_DEGREE: usize = 21;

    pub fn new(number_of_points: usize, fit_degree: usize) -> ChebyshevLagrangeApproximator {
        ChebyshevLagrangeApproximator { number_of_points, fit_degree }
    }

    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    pub fn fit_degree(&self) -> usize {
        self.fit_degree
    }
}

impl Default for ChebyshevLagrangeApproximator {
    fn default() -> ChebyshevLagrangeApproximator {
        ChebyshevLagrangeApproximator::new(Self::DEFAULT_POINTS, Self::DEFAULT_DEGREE)
    }
}

impl CurveApproximator for ChebyshevLagrangeApproximator {
    fn name(&self) -> &'static str {
        "chebyshev-lagrange"
    }

    fn approximate(&self, samples: &[f64]) -> Result<ToneCurve, ApproximationError> {
        if let Some(index) = first_non_finite(samples) {
            return Err(ApproximationError::NonFiniteSample { index });
        }
        let n = samples.len();
        if n == 0 || self.number_of_points == 0 {
            return Ok(ToneCurve::default());
        }
        let level = ControlPoint::MAX_LEVEL as f64;
        if n == 1 {
            let point = ControlPoint::truncated(0.0, samples[0] * level)
                .ok_or(ApproximationError::NonFiniteFit)?;
            return Ok(ToneCurve::new(vec![point]));
        }

        let index: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let scaled: Vec<f64> = samples.iter().map(|s| s * level).collect();
        let degree = self.fit_degree.min(n - 1);
        let fitted = Polynomial::fit_least_squares(&index, &scaled, degree)
            .map_err(ApproximationError::SingularFit)?;

        let upper = (n - 1) as f64;
        let node_points = chebyshev_nodes(0.0, upper, self.number_of_points)
            .into_iter()
            .map(|x| Point2D::new(x, fitted.value(x)))
            .collect();
        let lagrange = LagrangePolynomial::new(node_points).ok_or(ApproximationError::DuplicateNodes)?;

        let selected = lagrange.dominant_coef_indices(self.number_of_points);
        let x_scale = level / upper;
        let points: Vec<ControlPoint> = selected
            .iter()
            .map(|&i| {
                let node = lagrange.nodes()[i];
                ControlPoint::truncated(node * x_scale, lagrange.value(node))
                    .ok_or(ApproximationError::NonFiniteFit)
            })
            .collect::<Result<Vec<ControlPoint>, ApproximationError>>()?;

        log::debug!(
            "{}: {} samples, degree {} fit, {} of {} nodes kept",
            self.name(), n, degree, points.len(), self.number_of_points
        );
        Ok(ToneCurve::new(points))
    }
}
