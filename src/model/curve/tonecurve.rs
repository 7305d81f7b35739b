use std::fmt;

use crate::model::curve::controlpoint::ControlPoint;

/// Number of control points the binary consumer accepts per curve.
pub const POINT_LIMIT: usize = 16;

/// Control points in evaluation order. The order is kept as given and is not
/// necessarily sorted by `x`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToneCurve {
    points: Vec<ControlPoint>
}

impl ToneCurve {
    pub fn new(points: Vec<ControlPoint>) -> ToneCurve {
        ToneCurve { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn exceeds(&self, limit: usize) -> bool {
        self.points.len() > limit
    }

    pub fn out_of_range_points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter().filter(|p| !p.is_in_range())
    }
}

impl From<Vec<(i16, i16)>> for ToneCurve {
    fn from(pairs: Vec<(i16, i16)>) -> ToneCurve {
        ToneCurve::new(pairs.into_iter().map(|(x, y)| ControlPoint::new(x, y)).collect())
    }
}

impl fmt::Display for ToneCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.points.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}
