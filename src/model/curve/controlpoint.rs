use std::fmt;

/// One control point of a tone curve: `x` is the input level, `y` the output level.
///
/// Both text formats list points as `x y`; only the binary layout stores them the
/// other way round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlPoint {
    x: i16,
    y: i16
}

impl ControlPoint {
    pub const MIN_LEVEL: i16 = 0;
    pub const MAX_LEVEL: i16 = 255;

    pub fn new(x: i16, y: i16) -> ControlPoint {
        ControlPoint { x, y }
    }

    /// Builds a point from fitted coordinates, truncating toward zero.
    ///
    /// Out-of-range values are kept and saturate at the `i16` bounds. Returns
    /// `None` for NaN or infinite coordinates.
    pub fn truncated(x: f64, y: f64) -> Option<ControlPoint> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(ControlPoint::new(x.trunc() as i16, y.trunc() as i16))
    }

    /// Builds a point from already rounded coordinates, clamped into `[0, 255]`.
    pub fn clamped(x: f64, y: f64) -> ControlPoint {
        let clamp = |v: f64| v.clamp(Self::MIN_LEVEL as f64, Self::MAX_LEVEL as f64) as i16;
        ControlPoint::new(clamp(x), clamp(y))
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn is_in_range(&self) -> bool {
        let range = Self::MIN_LEVEL..=Self::MAX_LEVEL;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_keeps_out_of_range_values() {
        assert_eq!(ControlPoint::truncated(12.9, -3.7), Some(ControlPoint::new(12, -3)));
        assert_eq!(ControlPoint::truncated(300.2, 255.99), Some(ControlPoint::new(300, 255)));
        assert!(!ControlPoint::truncated(300.2, 0.0).unwrap().is_in_range());
    }

    #[test]
    fn truncated_refuses_non_finite_values() {
        assert_eq!(ControlPoint::truncated(10.0, f64::NAN), None);
        assert_eq!(ControlPoint::truncated(f64::INFINITY, 10.0), None);
        assert_eq!(ControlPoint::truncated(10.0, f64::NEG_INFINITY), None);
    }

    #[test]
    fn clamped_stays_in_range() {
        assert_eq!(ControlPoint::clamped(-4.0, 256.0), ControlPoint::new(0, 255));
        assert_eq!(ControlPoint::clamped(17.0, 42.0), ControlPoint::new(17, 42));
        assert!(ControlPoint::clamped(1e9, -1e9).is_in_range());
    }
}
