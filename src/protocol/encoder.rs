//! Reply-side serialization of the wire format.
//!
//! Servers assemble their replies with these functions; the client only
//! needs them for its tests, but the layout is the single source of truth
//! either way: whatever [`encode_header`] and [`encode_rows`] produce,
//! [`decode_header`](super::decode_header) and
//! [`decode_rows`](super::decode_rows) accept.

use bytes::{BufMut, BytesMut};

use super::{MAGIC, Value};

/// Encodes a header frame for a result with the given row count and columns.
///
/// `encode_header(0, &[])` is the canonical empty result.
pub fn encode_header<S: AsRef<str>>(row_count: u64, column_names: &[S]) -> Vec<u8> {
    let mut header = BytesMut::new();

    header.put_slice(&MAGIC[..]);
    header.put_u64(row_count);
    header.put_u64(column_names.len() as u64);

    for name in column_names {
        let bytes = name.as_ref().as_bytes();
        header.put_u64(bytes.len() as u64);
        header.put_slice(bytes);
    }

    header.to_vec()
}

/// Encodes rows into a row-data frame, row-major, one tagged value at a time.
pub fn encode_rows(rows: &[Vec<Value>]) -> Vec<u8> {
    let mut out = BytesMut::new();

    for row in rows {
        for value in row {
            out.put_u8(value.tag());

            match value {
                Value::Null => {}
                Value::Integer(i) => out.put_i64(*i),
                Value::Float(x) => out.put_f64(*x),
                Value::Text(s) => {
                    out.put_u64(s.len() as u64);
                    out.put_slice(s.as_bytes());
                }
                Value::Bytes(bytes) => {
                    out.put_u64(bytes.len() as u64);
                    out.put_slice(bytes);
                }
            }
        }
    }

    out.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_byte_exact() {
        let bytes = encode_header(1, &["id"]);

        let mut expected = b"SQNT".to_vec();
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(&2u64.to_be_bytes());
        expected.extend_from_slice(b"id");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn empty_header_is_magic_plus_zero_counts() {
        let bytes = encode_header(0, &[] as &[&str]);

        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[..4], b"SQNT");
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn values_are_tag_prefixed_big_endian() {
        let bytes = encode_rows(&[vec![
            Value::Null,
            Value::Integer(-1),
            Value::Text("ab".into()),
        ]]);

        let mut expected = vec![0u8];
        expected.push(1);
        expected.extend_from_slice(&(-1i64).to_be_bytes());
        expected.push(3);
        expected.extend_from_slice(&2u64.to_be_bytes());
        expected.extend_from_slice(b"ab");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn no_rows_encodes_to_no_bytes() {
        assert!(encode_rows(&[]).is_empty());
    }
}
