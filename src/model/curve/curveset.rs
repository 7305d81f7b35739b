use std::fmt;

use crate::model::curve::tonecurve::ToneCurve;

pub const DEFAULT_VERSION: i16 = 4;

/// A version tag plus tone curves in channel order (value, red, green, blue, ...).
///
/// Built fresh for every conversion; nothing here is shared between conversions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveSet {
    version: i16,
    curves: Vec<ToneCurve>
}

impl CurveSet {
    pub fn new(version: i16) -> CurveSet {
        CurveSet { version, curves: Vec::new() }
    }

    pub fn with_curves(version: i16, curves: Vec<ToneCurve>) -> CurveSet {
        CurveSet { version, curves }
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn curves(&self) -> &[ToneCurve] {
        &self.curves
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn push(&mut self, curve: ToneCurve) {
        self.curves.push(curve);
    }

    /// Compares point sequences curve by curve over the common prefix of both sets.
    ///
    /// Curves beyond the shorter set are not looked at, so a set matches any set
    /// that extends it, and an empty set matches everything. The version tag is
    /// ignored. Use `==` for strict equality.
    pub fn curves_match(&self, other: &CurveSet) -> bool {
        self.curves
            .iter()
            .zip(other.curves.iter())
            .all(|(lhs, rhs)| lhs.points() == rhs.points())
    }

    /// Size of the binary encoding in bytes: 4 + Σ(2 + 4·points).
    pub fn encoded_len(&self) -> usize {
        4 + self.curves.iter().map(|c| 2 + 4 * c.len()).sum::<usize>()
    }
}

impl Default for CurveSet {
    fn default() -> CurveSet {
        CurveSet::new(DEFAULT_VERSION)
    }
}

impl fmt::Display for CurveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version={}, curves={}", self.version, self.curve_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(curves: Vec<Vec<(i16, i16)>>) -> CurveSet {
        CurveSet::with_curves(DEFAULT_VERSION, curves.into_iter().map(ToneCurve::from).collect())
    }

    #[test]
    fn default_set_is_empty_version_4() {
        let curves = CurveSet::default();
        assert_eq!(curves.version(), 4);
        assert_eq!(curves.curve_count(), 0);
        assert_eq!(curves.encoded_len(), 4);
        assert_eq!(curves.to_string(), "version=4, curves=0");
    }

    #[test]
    fn curves_match_compares_points() {
        let a = set(vec![vec![(0, 0), (255, 255)], vec![(0, 10)]]);
        let b = set(vec![vec![(0, 0), (255, 255)], vec![(0, 10)]]);
        let c = set(vec![vec![(0, 0), (255, 254)], vec![(0, 10)]]);
        assert!(a.curves_match(&b));
        assert!(!a.curves_match(&c));
        assert!(!c.curves_match(&a));
    }

    #[test]
    fn curves_match_truncates_to_shorter_set() {
        let long = set(vec![vec![(0, 0), (255, 255)], vec![(3, 4)], vec![(9, 9)]]);
        let short = set(vec![vec![(0, 0), (255, 255)]]);
        let empty = set(Vec::new());

        // only the common prefix is compared, in both directions
        assert!(long.curves_match(&short));
        assert!(short.curves_match(&long));
        assert!(empty.curves_match(&long));
        // strict equality still tells them apart
        assert_ne!(long, short);
    }

    #[test]
    fn curves_match_ignores_version() {
        let a = CurveSet::with_curves(4, vec![ToneCurve::from(vec![(1, 2)])]);
        let b = CurveSet::with_curves(1, vec![ToneCurve::from(vec![(1, 2)])]);
        assert!(a.curves_match(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn encoded_len_counts_points() {
        let curves = set(vec![vec![(0, 0), (255, 255)], vec![]]);
        assert_eq!(curves.encoded_len(), 4 + (2 + 8) + 2);
    }
}
