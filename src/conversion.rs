use std::fmt;
use std::fs;
use std::path::{
    Path,
    PathBuf
};

use thiserror::Error;

use crate::codec::binarycurvecodec::{
    from_binary,
    to_binary
};
use crate::codec::codecerror::CodecError;
use crate::configuration::{
    ConfigurationError,
    ConversionOptions
};
use crate::model::curve::curveset::CurveSet;
use crate::text::curvewarning::CurveWarning;
use crate::text::textcurveparser::TextCurveFormat;
use crate::text::textparseerror::TextParseError;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Parse(#[from] TextParseError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("encoded curves do not decode back to the parsed curves")]
    RoundTripMismatch
}

/// Result of converting curve text in memory.
pub struct Conversion {
    format: TextCurveFormat,
    approximator: &'static str,
    curve_set: CurveSet,
    warnings: Vec<CurveWarning>,
    bytes: Vec<u8>
}

impl Conversion {
    pub fn format(&self) -> TextCurveFormat {
        self.format
    }

    pub fn approximator(&self) -> &'static str {
        self.approximator
    }

    pub fn curve_set(&self) -> &CurveSet {
        &self.curve_set
    }

    pub fn warnings(&self) -> &[CurveWarning] {
        &self.warnings
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Parses, encodes and checks that the encoding decodes to the same curves.
pub fn convert_text(text: &str, options: &ConversionOptions) -> Result<Conversion, ConversionError> {
    let parser = options.build_parser();
    let approximator = parser.approximator().name();
    let parsed = parser.parse(text)?;
    let format = parsed.format();
    let (curve_set, warnings) = parsed.into_parts();

    let bytes = to_binary(&curve_set)?;
    if from_binary(&bytes)? != curve_set {
        return Err(ConversionError::RoundTripMismatch);
    }

    Ok(Conversion { format, approximator, curve_set, warnings, bytes })
}

pub struct ConversionSummary {
    input: PathBuf,
    output: PathBuf,
    conversion: Conversion
}

impl ConversionSummary {
    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conversion = &self.conversion;
        writeln!(f, "input:    {}", self.input.display())?;
        writeln!(f, "output:   {}", self.output.display())?;
        match conversion.format {
            TextCurveFormat::Legacy => writeln!(f, "format:   {}", conversion.format)?,
            TextCurveFormat::Sampled => {
                writeln!(f, "format:   {} ({})", conversion.format, conversion.approximator)?
            }
        }
        writeln!(f, "curves:   {}", conversion.curve_set)?;
        for (index, curve) in conversion.curve_set.curves().iter().enumerate() {
            writeln!(f, "  curve {}: {} points", index, curve.len())?;
        }
        write!(f, "written:  {} bytes", conversion.bytes.len())?;
        for warning in conversion.warnings.iter() {
            write!(f, "\nwarning:  {}", warning)?;
        }
        Ok(())
    }
}

/// Converts a GIMP curves file into an `.acv` file. Nothing is written unless
/// the whole conversion succeeds.
pub fn convert_file(input: &Path,
                    output: &Path,
                    options: &ConversionOptions) -> Result<ConversionSummary, ConversionError> {
    let raw = fs::read(input).map_err(|source| ConversionError::Read {
        path: input.to_owned(),
        source
    })?;
    let text = String::from_utf8_lossy(&raw);
    let conversion = convert_text(&text, options)?;

    fs::write(output, conversion.bytes()).map_err(|source| ConversionError::Write {
        path: output.to_owned(),
        source
    })?;
    log::info!(
        "converted {} into {} ({})",
        input.display(), output.display(), conversion.curve_set()
    );

    Ok(ConversionSummary {
        input: input.to_owned(),
        output: output.to_owned(),
        conversion
    })
}

pub fn read_curve_file(path: &Path) -> Result<CurveSet, ConversionError> {
    let bytes = fs::read(path).map_err(|source| ConversionError::Read {
        path: path.to_owned(),
        source
    })?;
    Ok(from_binary(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::curve::tonecurve::ToneCurve;

    #[test]
    fn legacy_text_end_to_end() {
        let conversion = convert_text("# GIMP Curves File\n0 0 255 255\n", &ConversionOptions::new()).unwrap();
        assert_eq!(conversion.format(), TextCurveFormat::Legacy);
        assert_eq!(
            conversion.bytes(),
            &[0x00, 0x04, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x00, 0xff]
        );
        let decoded = from_binary(conversion.bytes()).unwrap();
        assert_eq!(decoded.curves()[0], ToneCurve::from(vec![(0, 0), (255, 255)]));
    }

    #[test]
    fn empty_sampled_text_gives_header_only() {
        let conversion = convert_text("# GIMP curves tool settings\n(time 0)\n", &ConversionOptions::new()).unwrap();
        assert_eq!(conversion.curve_set().curve_count(), 0);
        assert_eq!(conversion.bytes(), &[0x00, 0x04, 0x00, 0x00]);
    }

    #[test]
    fn parse_errors_abort() {
        let result = convert_text("# GIMP Curves File\n0 zero\n", &ConversionOptions::new());
        assert!(matches!(result, Err(ConversionError::Parse(_))));
    }

    #[test]
    fn missing_input_keeps_io_cause() {
        let input = std::env::temp_dir().join("acvcurve-missing-input.txt");
        let output = std::env::temp_dir().join("acvcurve-missing-input.txt.acv");
        match convert_file(&input, &output, &ConversionOptions::new()) {
            Err(ConversionError::Read { path, source }) => {
                assert_eq!(path, input);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("conversion of a missing file succeeded"),
        }
        assert!(!output.exists());
    }
}
