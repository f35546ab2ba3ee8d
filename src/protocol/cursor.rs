use thiserror::Error;

/// A read requested more bytes than remain in the frame.
///
/// Always indicates a malformed or incomplete frame. Never surfaced to the
/// application directly; the decoder wraps it into a
/// [`DecodeError`](super::DecodeError).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("truncated frame: needed {needed} byte(s) at offset {offset}, {remaining} remaining")]
pub struct Truncated {
    pub needed: usize,
    pub remaining: usize,
    pub offset: usize,
}

/// Forward-only reader over an immutable byte buffer.
///
/// The offset only ever moves forward, by exactly the number of bytes each
/// extraction consumes. Reading past the end of the buffer fails with
/// [`Truncated`] rather than returning partial or zero-filled data. All
/// multi-byte reads are big-endian; that is a protocol constant, not an
/// option.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Current read position within the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn slice(&mut self, len: usize) -> Result<&'a [u8], Truncated> {
        if self.remaining() < len {
            return Err(Truncated {
                needed: len,
                remaining: self.remaining(),
                offset: self.offset,
            });
        }
        let out = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(out)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], Truncated> {
        let bytes = self.slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads one unsigned 8-bit integer.
    pub fn u8(&mut self) -> Result<u8, Truncated> {
        Ok(self.array::<1>()?[0])
    }

    /// Reads one big-endian unsigned 64-bit integer.
    pub fn u64_be(&mut self) -> Result<u64, Truncated> {
        Ok(u64::from_be_bytes(self.array()?))
    }

    /// Reads one big-endian signed 64-bit integer.
    pub fn i64_be(&mut self) -> Result<i64, Truncated> {
        Ok(i64::from_be_bytes(self.array()?))
    }

    /// Reads one big-endian IEEE-754 64-bit float.
    pub fn f64_be(&mut self) -> Result<f64, Truncated> {
        Ok(f64::from_be_bytes(self.array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_advances_by_exactly_len() {
        let mut cursor = ByteCursor::new(b"SQNTrest");

        assert_eq!(cursor.slice(4).unwrap(), b"SQNT");
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.slice(4).unwrap(), b"rest");
        assert_eq!(cursor.offset(), 8);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn empty_slice_always_succeeds() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.slice(0).unwrap(), &[] as &[u8]);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn over_read_is_truncated_not_partial() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);

        let err = cursor.slice(5).unwrap_err();
        assert_eq!(
            err,
            Truncated {
                needed: 5,
                remaining: 3,
                offset: 0
            }
        );
        // a failed read must not move the offset
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.slice(3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn u8_reads_single_byte() {
        let mut cursor = ByteCursor::new(&[0x2a, 0x00]);
        assert_eq!(cursor.u8().unwrap(), 42);
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn u64_is_big_endian() {
        let mut cursor = ByteCursor::new(&[0, 0, 0, 0, 0, 0, 0x23, 0x7f]);
        assert_eq!(cursor.u64_be().unwrap(), 0x237f);
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn i64_reads_negative_values() {
        let bytes = (-42i64).to_be_bytes();
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.i64_be().unwrap(), -42);
    }

    #[test]
    fn f64_round_trips_ieee_bits() {
        let bytes = 1.5f64.to_be_bytes();
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.f64_be().unwrap(), 1.5);
    }

    #[test]
    fn fixed_width_reads_fail_on_short_buffer() {
        let mut cursor = ByteCursor::new(&[0; 7]);
        assert!(cursor.u64_be().is_err());
        assert!(cursor.i64_be().is_err());
        assert!(cursor.f64_be().is_err());
        assert_eq!(cursor.offset(), 0);
    }
}
