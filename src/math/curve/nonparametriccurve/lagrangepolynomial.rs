use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;

// ─────────────────────────────────────────────────────────────────────────────
// LagrangePolynomial - Barycentric Form (2nd kind)
// ─────────────────────────────────────────────────────────────────────────────
//
//   L(x) = Σ w_i·y_i/(x-x_i) / Σ w_i/(x-x_i)
//
// barycentric weights:
//   w_i = 1 / Π_{j≠i} (x_i - x_j)
//
// Evaluation goes through the barycentric form. The monomial (power basis)
// coefficients are expanded once at construction, because curve
// approximation ranks nodes by the magnitude of those coefficients.
// With cosine-spaced nodes over [0, 255] the high-order coefficients are tiny
// but still well defined; they are never used for evaluation.

pub struct LagrangePolynomial {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    weights: Vec<f64>,
    /// [a_0, a_1, ..., a_{n-1}] for Σ a_k·x^k
    monomial_coefs: Vec<f64>,
}

impl LagrangePolynomial {
    /// Returns `None` for an empty node set or when two nodes share an abscissa.
    pub fn new(mut points: Vec<Point2D>) -> Option<LagrangePolynomial> {
        let n = points.len();
        if n == 0 {
            return None;
        }

        points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        if points.windows(2).any(|pair| pair[0].x() == pair[1].x()) {
            return None;
        }

        let x_data: Vec<f64> = points.iter().map(|p| p.x()).collect();
        let y_data: Vec<f64> = points.iter().map(|p| p.y()).collect();

        let weights = Self::compute_barycentric_weights(&x_data);
        let monomial_coefs = Self::convert_to_monomial(&x_data, &y_data);

        Some(LagrangePolynomial {
            x_data,
            y_data,
            weights,
            monomial_coefs,
        })
    }

    /// w_i = 1 / Π_{j≠i} (x_i - x_j), O(n²)
    fn compute_barycentric_weights(x_data: &[f64]) -> Vec<f64> {
        let n = x_data.len();
        let mut weights = vec![1.0; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    weights[i] /= x_data[i] - x_data[j];
                }
            }
        }

        weights
    }

    /// Lagrange → Newton divided differences → monomial form.
    ///
    /// Returns [a_0, a_1, ..., a_{n-1}] for a_0 + a_1·x + ... + a_{n-1}·x^{n-1}.
    fn convert_to_monomial(x_data: &[f64], y_data: &[f64]) -> Vec<f64> {
        let n = x_data.len();

        // f[i] = f[x_0, x_1, ..., x_i]
        let mut f = y_data.to_vec();
        for j in 1..n {
            for i in (j..n).rev() {
                f[i] = (f[i] - f[i - 1]) / (x_data[i] - x_data[i - j]);
            }
        }

        // Newton: f[x_0] + f[x_0,x_1]·(x-x_0) + f[x_0,x_1,x_2]·(x-x_0)(x-x_1) + ...
        // expanded Horner-like from the highest order down
        let mut monomial = vec![0.0; n];
        monomial[n - 1] = f[n - 1];

        for i in (0..n - 1).rev() {
            // multiply by (x - x_i)
            for k in (1..n).rev() {
                monomial[k] = monomial[k - 1] - x_data[i] * monomial[k];
            }
            monomial[0] = -x_data[i] * monomial[0];

            monomial[0] += f[i];
        }

        monomial
    }

    /// Interpolation nodes in ascending order.
    pub fn nodes(&self) -> &[f64] {
        &self.x_data
    }

    /// Power-basis coefficients, lowest degree first.
    pub fn monomial_coefs(&self) -> &[f64] {
        &self.monomial_coefs
    }

    /// Indices of the `count` coefficients with the largest magnitude, sorted ascending.
    ///
    /// Coefficients are taken highest degree first, so index `i` lines up with the
    /// `i`-th node in ascending order. Ties keep the lower index.
    pub fn dominant_coef_indices(&self, count: usize) -> Vec<usize> {
        let highest_first: Vec<f64> = self.monomial_coefs.iter().rev().copied().collect();
        let mut ranked: Vec<usize> = (0..highest_first.len()).collect();
        ranked.sort_by(|&a, &b| {
            highest_first[b].abs().total_cmp(&highest_first[a].abs()).then(a.cmp(&b))
        });
        ranked.truncate(count);
        ranked.sort_unstable();
        ranked
    }

    /// Exact node hits return y_i directly (avoids 0/0).
    fn value_barycentric(&self, x: f64) -> f64 {
        let n = self.x_data.len();

        for i in 0..n {
            if (x - self.x_data[i]).abs() < f64::EPSILON {
                return self.y_data[i];
            }
        }

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for i in 0..n {
            let temp = self.weights[i] / (x - self.x_data[i]);
            numerator += temp * self.y_data[i];
            denominator += temp;
        }

        numerator / denominator
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────────────

impl Curve for LagrangePolynomial {
    fn value(&self, x: f64) -> f64 {
        self.value_barycentric(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic() -> LagrangePolynomial {
        // y = 2x² - 3x + 1
        let points = [0.0, 1.0, 2.5]
            .iter()
            .map(|&x| Point2D::new(x, 2.0 * x * x - 3.0 * x + 1.0))
            .collect();
        LagrangePolynomial::new(points).unwrap()
    }

    #[test]
    fn interpolates_nodes_and_between() {
        let poly = quadratic();
        assert_eq!(poly.value(1.0), 0.0);
        assert!((poly.value(2.0) - 3.0).abs() < 1e-12);
        assert!((poly.value(-1.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn monomial_expansion_matches_polynomial() {
        let coefs = quadratic().monomial_coefs().to_vec();
        assert!((coefs[0] - 1.0).abs() < 1e-12);
        assert!((coefs[1] + 3.0).abs() < 1e-12);
        assert!((coefs[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn dominant_indices_are_sorted_highest_degree_first() {
        // highest first: [2, -3, 1] → ranking by |c|: 1 (3), 0 (2), 2 (1)
        let poly = quadratic();
        assert_eq!(poly.dominant_coef_indices(2), vec![0, 1]);
        assert_eq!(poly.dominant_coef_indices(10), vec![0, 1, 2]);
    }

    #[test]
    fn nodes_are_sorted_and_duplicates_rejected() {
        let poly = LagrangePolynomial::new(vec![
            Point2D::new(3.0, 1.0),
            Point2D::new(-1.0, 2.0),
        ]).unwrap();
        assert_eq!(poly.nodes(), &[-1.0, 3.0]);
        assert_eq!(poly.value(3.0), 1.0);
        assert_eq!(poly.value(-1.0), 2.0);

        let duplicate = LagrangePolynomial::new(vec![
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 2.0),
        ]);
        assert!(duplicate.is_none());
        assert!(LagrangePolynomial::new(Vec::new()).is_none());
    }
}
