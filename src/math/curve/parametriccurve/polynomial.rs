use nalgebra::{
    DMatrix,
    DVector
};

use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────
//
// Coefficients are stored highest degree first, [c_d, ..., c_1, c_0], over a
// mapped variable t = (x - shift)·scale:
//   p(x) = c_d·t^d + ... + c_1·t + c_0
// and evaluated with Horner's scheme. Fitted polynomials map their data range
// onto [-1, 1] so that high degrees stay well conditioned.

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>,
    shift: f64,
    scale: f64
}

impl Polynomial {
    /// Polynomial in x itself (no domain mapping).
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        let coefs = if coefs.is_empty() { vec![0.0] } else { coefs };
        Polynomial { coefs, shift: 0.0, scale: 1.0 }
    }

    /// Least-squares fit of a degree `degree` polynomial through `(x_i, y_i)`.
    ///
    /// The Vandermonde columns are normalised to unit length before an SVD solve,
    /// and singular values below `len(x)·ε` relative to the largest are treated as
    /// zero. An over-parameterised fit (rank deficient system) therefore yields the
    /// minimum-norm solution instead of failing.
    pub fn fit_least_squares(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial, &'static str> {
        if x.len() != y.len() {
            return Err("abscissa and ordinate lengths differ");
        }
        if x.is_empty() {
            return Err("no data to fit");
        }

        let min_x = x.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let shift = 0.5 * (min_x + max_x);
        let scale = if max_x > min_x { 2.0 / (max_x - min_x) } else { 1.0 };
        let t: Vec<f64> = x.iter().map(|&xi| (xi - shift) * scale).collect();

        let rows = t.len();
        let cols = degree + 1;
        let power = |j: usize| (degree - j) as i32;

        let norms: Vec<f64> = (0..cols)
            .map(|j| {
                let norm = t.iter().map(|&ti| ti.powi(power(j)).powi(2)).sum::<f64>().sqrt();
                if norm > 0.0 { norm } else { 1.0 }
            })
            .collect();

        let vandermonde = DMatrix::from_fn(rows, cols, |i, j| t[i].powi(power(j)) / norms[j]);
        let rhs = DVector::from_column_slice(y);

        let svd = vandermonde.svd(true, true);
        let largest = svd.singular_values.iter().copied().fold(0.0, f64::max);
        let cutoff = rows as f64 * f64::EPSILON * largest;
        let solution = svd.solve(&rhs, cutoff)?;

        let coefs = solution
            .iter()
            .zip(norms.iter())
            .map(|(c, norm)| c / norm)
            .collect();
        Ok(Polynomial { coefs, shift, scale })
    }

    /// Coefficients in the mapped variable, highest degree first.
    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }
}

impl Curve for Polynomial {
    fn value(&self, x: f64) -> f64 {
        let t = (x - self.shift) * self.scale;
        let mut result = self.coefs[0];
        for &beta in &self.coefs[1..] {
            result = f64::mul_add(result, t, beta);
        }
        result
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}
