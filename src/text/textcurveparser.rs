//! GIMP curves files.
//!
//! Two layouts are understood:
//!
//! * legacy (GIMP ≤ 2.6): a `# GIMP Curves File` header, then one line per
//!   channel of `x y` integer pairs, with `-1` marking an unused slot;
//! * sampled (GIMP ≥ 2.8): S-expression settings in which every channel carries
//!   a `(samples N v0 v1 ...)` line of output levels in [0, 1].

use std::fmt;

use crate::approximation::approximator::CurveApproximator;
use crate::model::curve::controlpoint::ControlPoint;
use crate::model::curve::curveset::CurveSet;
use crate::model::curve::tonecurve::ToneCurve;
use crate::text::curvewarning::CurveWarning;
use crate::text::textparseerror::TextParseError;

pub const LEGACY_HEADER: &str = "# GIMP Curves File";
pub const SAMPLES_MARKER: &str = "(samples";
pub const UNSET_SENTINEL: i16 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextCurveFormat {
    Legacy,
    Sampled
}

impl fmt::Display for TextCurveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextCurveFormat::Legacy => write!(f, "legacy control points"),
            TextCurveFormat::Sampled => write!(f, "sampled curves")
        }
    }
}

/// Classifies by the first line only. Anything without the legacy header is
/// treated as sampled.
pub fn detect_format(text: &str) -> TextCurveFormat {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.trim_start().starts_with(LEGACY_HEADER) {
        TextCurveFormat::Legacy
    } else {
        TextCurveFormat::Sampled
    }
}

#[derive(Debug)]
pub struct ParsedCurveSet {
    format: TextCurveFormat,
    curve_set: CurveSet,
    warnings: Vec<CurveWarning>
}

impl ParsedCurveSet {
    pub fn format(&self) -> TextCurveFormat {
        self.format
    }

    pub fn curve_set(&self) -> &CurveSet {
        &self.curve_set
    }

    pub fn warnings(&self) -> &[CurveWarning] {
        &self.warnings
    }

    pub fn into_parts(self) -> (CurveSet, Vec<CurveWarning>) {
        (self.curve_set, self.warnings)
    }
}

pub struct TextCurveParser {
    approximator: Box<dyn CurveApproximator>,
    version: i16,
    point_limit: usize
}

impl TextCurveParser {
    pub fn new(approximator: Box<dyn CurveApproximator>,
               version: i16,
               point_limit: usize) -> TextCurveParser {
        TextCurveParser { approximator, version, point_limit }
    }

    pub fn approximator(&self) -> &dyn CurveApproximator {
        self.approximator.as_ref()
    }

    pub fn parse(&self, text: &str) -> Result<ParsedCurveSet, TextParseError> {
        let format = detect_format(text);
        log::debug!("detected {} format", format);

        let mut warnings = Vec::new();
        let curve_set = match format {
            TextCurveFormat::Legacy => self.parse_legacy(text, &mut warnings)?,
            TextCurveFormat::Sampled => self.parse_sampled(text, &mut warnings)?
        };

        for warning in warnings.iter() {
            log::warn!("{}", warning);
        }
        Ok(ParsedCurveSet { format, curve_set, warnings })
    }

    fn parse_legacy(&self, text: &str, warnings: &mut Vec<CurveWarning>) -> Result<CurveSet, TextParseError> {
        let mut curve_set = CurveSet::new(self.version);

        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let values = content
                .split_whitespace()
                .map(|token| {
                    token.parse::<i16>().map_err(|_| TextParseError::InvalidInteger {
                        line: line_number,
                        token: token.to_owned()
                    })
                })
                .collect::<Result<Vec<i16>, TextParseError>>()?;

            let mut curve = ToneCurve::default();
            for pair in values.chunks(2) {
                match pair {
                    &[x, _] if x == UNSET_SENTINEL => {},
                    &[x, y] => curve.push(ControlPoint::new(x, y)),
                    &[value] => warnings.push(CurveWarning::DanglingValue { line: line_number, value }),
                    _ => {}
                }
            }

            let curve_index = curve_set.curve_count();
            self.check_point_range(curve_index, &curve, warnings);
            self.check_point_limit(curve_index, &curve, warnings);
            curve_set.push(curve);
        }

        Ok(curve_set)
    }

    fn parse_sampled(&self, text: &str, warnings: &mut Vec<CurveWarning>) -> Result<CurveSet, TextParseError> {
        let mut curve_set = CurveSet::new(self.version);

        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let content = line.trim().replace(')', "");
            let mut tokens = content.split_whitespace();
            if tokens.next() != Some(SAMPLES_MARKER) {
                continue;
            }

            let invalid = |token: &str| TextParseError::InvalidSample {
                line: line_number,
                token: token.to_owned()
            };
            let declared = match tokens.next() {
                Some(token) => token.parse::<usize>().map_err(|_| invalid(token))?,
                None => 0
            };
            let samples = tokens
                .map(|token| {
                    token.parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| invalid(token))
                })
                .collect::<Result<Vec<f64>, TextParseError>>()?;

            let curve_index = curve_set.curve_count();
            if declared != samples.len() {
                warnings.push(CurveWarning::SampleCountMismatch {
                    curve: curve_index,
                    declared,
                    actual: samples.len()
                });
            }

            let curve = self.approximator
                .approximate(&samples)
                .map_err(|source| TextParseError::Approximation { curve: curve_index, source })?;

            self.check_point_range(curve_index, &curve, warnings);
            self.check_point_limit(curve_index, &curve, warnings);
            curve_set.push(curve);
        }

        Ok(curve_set)
    }

    fn check_point_range(&self, curve_index: usize, curve: &ToneCurve, warnings: &mut Vec<CurveWarning>) {
        for point in curve.out_of_range_points() {
            warnings.push(CurveWarning::PointOutOfRange {
                curve: curve_index,
                x: point.x(),
                y: point.y()
            });
        }
    }

    fn check_point_limit(&self, curve_index: usize, curve: &ToneCurve, warnings: &mut Vec<CurveWarning>) {
        if curve.exceeds(self.point_limit) {
            warnings.push(CurveWarning::PointLimitExceeded {
                curve: curve_index,
                points: curve.len(),
                limit: self.point_limit
            });
        }
    }
}
