use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf
};

use serde::Deserialize;
use thiserror::Error;

use crate::approximation::approximator::ApproximationStrategy;
use crate::approximation::chebyshevlagrangeapproximator::ChebyshevLagrangeApproximator;
use crate::model::curve::curveset::DEFAULT_VERSION;
use crate::model::curve::tonecurve::POINT_LIMIT;
use crate::text::textcurveparser::TextCurveParser;

pub const DEFAULT_OUTPUT_SUFFIX: &str = ".acv";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid configuration {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error }
}

/// Settings for one conversion. Every field is optional in the JSON form:
///
/// ```json
/// { "strategy": "direct_polynomial", "number_of_points": 12 }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConversionOptions {
    version: i16,
    strategy: ApproximationStrategy,
    number_of_points: usize,
    fit_degree: usize,
    point_limit: usize,
    output_suffix: String
}

impl ConversionOptions {
    pub fn new() -> ConversionOptions {
        ConversionOptions::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<ConversionOptions, ConfigurationError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| ConfigurationError::Io {
            path: path.to_owned(),
            source
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigurationError::Json {
            path: path.to_owned(),
            source
        })
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn strategy(&self) -> ApproximationStrategy {
        self.strategy
    }

    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    pub fn fit_degree(&self) -> usize {
        self.fit_degree
    }

    pub fn point_limit(&self) -> usize {
        self.point_limit
    }

    pub fn output_suffix(&self) -> &str {
        &self.output_suffix
    }

    pub fn with_strategy(mut self, strategy: ApproximationStrategy) -> ConversionOptions {
        self.strategy = strategy;
        self
    }

    pub fn with_number_of_points(mut self, number_of_points: usize) -> ConversionOptions {
        self.number_of_points = number_of_points;
        self
    }

    /// A parser with its own approximator; nothing is shared between parsers.
    pub fn build_parser(&self) -> TextCurveParser {
        let approximator = self.strategy.build(self.number_of_points, self.fit_degree);
        TextCurveParser::new(approximator, self.version, self.point_limit)
    }

    /// `output` with the suffix appended when missing, or `input` plus the suffix.
    pub fn resolve_output_path(&self, input: &Path, output: Option<&Path>) -> PathBuf {
        let base = output.unwrap_or(input);
        let mut path = base.as_os_str().to_owned();
        if output.is_none() || !base.to_string_lossy().ends_with(self.output_suffix.as_str()) {
            path.push(&self.output_suffix);
        }
        PathBuf::from(path)
    }
}

impl Default for ConversionOptions {
    fn default() -> ConversionOptions {
        ConversionOptions {
            version: DEFAULT_VERSION,
            strategy: ApproximationStrategy::default(),
            number_of_points: ChebyshevLagrangeApproximator::DEFAULT_POINTS,
            fit_degree: ChebyshevLagrangeApproximator::DEFAULT_DEGREE,
            point_limit: POINT_LIMIT,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_owned()
        }
    }
}
