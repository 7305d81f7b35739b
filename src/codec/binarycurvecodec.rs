//! Adobe `.acv` curve files.
//!
//! ```text
//! 0x0  version      i16
//! 0x2  curve count  i16
//!      per curve:   point count i16, then point count × (y i16, x i16)
//! ```
//!
//! All fields are big-endian. Points are stored output level first.

use crate::codec::bigendian::{
    push_i16,
    read_i16
};
use crate::codec::codecerror::CodecError;
use crate::model::curve::controlpoint::ControlPoint;
use crate::model::curve::curveset::CurveSet;
use crate::model::curve::tonecurve::ToneCurve;

const HEADER_LEN: usize = 4;

pub fn from_binary(bytes: &[u8]) -> Result<CurveSet, CodecError> {
    let version = read_field(bytes, 0, "version")?;
    let curve_count = read_count(bytes, 2, "curve count")?;

    let mut curve_set = CurveSet::new(version);
    let mut offset = HEADER_LEN;
    for curve_index in 0..curve_count {
        let point_count = read_count(bytes, offset, "point count")
            .map_err(|error| in_curve(error, curve_index))?;

        let mut curve = ToneCurve::new(Vec::with_capacity(point_count));
        for point_index in 0..point_count {
            let base = offset + 2 + point_index * 4;
            let y = read_field(bytes, base, "point y")
                .map_err(|error| in_curve(error, curve_index))?;
            let x = read_field(bytes, base + 2, "point x")
                .map_err(|error| in_curve(error, curve_index))?;
            curve.push(ControlPoint::new(x, y));
        }

        curve_set.push(curve);
        offset += 2 + point_count * 4;
    }

    if offset < bytes.len() {
        log::debug!("ignoring {} trailing bytes after curve data", bytes.len() - offset);
    }

    Ok(curve_set)
}

pub fn to_binary(curve_set: &CurveSet) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::with_capacity(curve_set.encoded_len());
    push_i16(&mut bytes, curve_set.version());
    push_i16(&mut bytes, encode_count(curve_set.curve_count(), "curve count")?);

    for curve in curve_set.curves() {
        push_i16(&mut bytes, encode_count(curve.len(), "point count")?);
        for point in curve.points() {
            push_i16(&mut bytes, point.y());
            push_i16(&mut bytes, point.x());
        }
    }

    Ok(bytes)
}

fn read_field(bytes: &[u8], offset: usize, field: &str) -> Result<i16, CodecError> {
    read_i16(bytes, offset).map_err(|error| {
        CodecError::MalformedBinary(format!("truncated {} ({})", field, error))
    })
}

fn read_count(bytes: &[u8], offset: usize, field: &str) -> Result<usize, CodecError> {
    let count = read_field(bytes, offset, field)?;
    usize::try_from(count).map_err(|_| {
        CodecError::MalformedBinary(format!("negative {} {} at offset {}", field, count, offset))
    })
}

fn encode_count(count: usize, what: &'static str) -> Result<i16, CodecError> {
    i16::try_from(count).map_err(|_| CodecError::CountOverflow { what, count })
}

fn in_curve(error: CodecError, curve_index: usize) -> CodecError {
    match error {
        CodecError::MalformedBinary(reason) => {
            CodecError::MalformedBinary(format!("curve {}: {}", curve_index, reason))
        },
        other => other
    }
}
