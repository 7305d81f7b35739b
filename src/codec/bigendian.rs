use crate::codec::codecerror::CodecError;

/// Reads a signed 16-bit big-endian integer at `offset`.
pub fn read_i16(buffer: &[u8], offset: usize) -> Result<i16, CodecError> {
    let out_of_bounds = || CodecError::OutOfBounds { offset, len: buffer.len() };
    let end = offset.checked_add(2).ok_or_else(out_of_bounds)?;
    let bytes = buffer.get(offset..end).ok_or_else(out_of_bounds)?;
    Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
}

pub fn write_i16(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn push_i16(buffer: &mut Vec<u8>, value: i16) {
    buffer.extend_from_slice(&write_i16(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_most_significant_byte_first() {
        let buffer = [0x00, 0x04, 0xff, 0xff, 0x80, 0x00];
        assert_eq!(read_i16(&buffer, 0), Ok(4));
        assert_eq!(read_i16(&buffer, 2), Ok(-1));
        assert_eq!(read_i16(&buffer, 4), Ok(i16::MIN));
        assert_eq!(read_i16(&buffer, 1), Ok(0x04ff));
    }

    #[test]
    fn read_past_end_is_out_of_bounds() {
        let buffer = [0x00, 0x04, 0x01];
        assert_eq!(read_i16(&buffer, 2), Err(CodecError::OutOfBounds { offset: 2, len: 3 }));
        assert_eq!(read_i16(&buffer, 7), Err(CodecError::OutOfBounds { offset: 7, len: 3 }));
        assert!(read_i16(&buffer, usize::MAX).is_err());
    }

    #[test]
    fn writes_big_endian() {
        assert_eq!(write_i16(255), [0x00, 0xff]);
        assert_eq!(write_i16(-2), [0xff, 0xfe]);
        let mut buffer = Vec::new();
        push_i16(&mut buffer, 4);
        push_i16(&mut buffer, 0x0102);
        assert_eq!(buffer, vec![0x00, 0x04, 0x01, 0x02]);
    }
}
