use std::f64::consts::PI;

/// `count` Chebyshev nodes of the first kind mapped onto `[lower, upper]`, ascending.
///
///   x_k = (a+b)/2 + (b-a)/2 · cos((2k+1)π / 2n),  k = 0..n-1
pub fn chebyshev_nodes(lower: f64, upper: f64, count: usize) -> Vec<f64> {
    let mid = 0.5 * (lower + upper);
    let half = 0.5 * (upper - lower);
    let n = count as f64;
    let mut nodes: Vec<f64> = (0..count)
        .map(|k| mid + half * ((2.0 * k as f64 + 1.0) * PI / (2.0 * n)).cos())
        .collect();
    nodes.sort_by(|a, b| a.total_cmp(b));
    nodes
}
