use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("reading 2 bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds { offset: usize, len: usize },
    #[error("malformed curve binary: {0}")]
    MalformedBinary(String),
    #[error("{what} {count} does not fit in a signed 16-bit field")]
    CountOverflow { what: &'static str, count: usize }
}
