use thiserror::Error;

use super::{
    cursor::{ByteCursor, Truncated},
    result::QueryResult,
    value::{Value, tag},
};

/// Magic bytes opening every header frame.
pub const MAGIC: &[u8; 4] = b"SQNT";

/// A reply frame violated the wire protocol.
///
/// Any of these aborts the decode of the whole result; no partial
/// [`QueryResult`] is ever produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("bad magic: expected \"SQNT\", got {0:?}")]
    BadMagic([u8; 4]),

    #[error("column name {index} is not valid utf-8")]
    InvalidColumnName { index: u64 },

    #[error("text value at row {row}, column {column} is not valid utf-8")]
    InvalidText { row: u64, column: u64 },

    #[error("unknown value tag {tag} at row {row}, column {column}")]
    UnknownTag { tag: u8, row: u64, column: u64 },

    #[error(transparent)]
    Truncated(#[from] Truncated),
}

/// Decodes a header frame into `(row_count, column_count, column_names)`.
pub fn decode_header(bytes: &[u8]) -> Result<(u64, u64, Vec<String>), DecodeError> {
    let mut cursor = ByteCursor::new(bytes);

    let magic = cursor.slice(MAGIC.len())?;
    if magic != MAGIC {
        let mut got = [0u8; 4];
        got.copy_from_slice(magic);
        return Err(DecodeError::BadMagic(got));
    }

    let row_count = cursor.u64_be()?;
    let column_count = cursor.u64_be()?;

    // a lying count must not drive preallocation; every name entry needs at
    // least its 8-byte length prefix
    let mut column_names =
        Vec::with_capacity(column_count.min(cursor.remaining() as u64 / 8) as usize);
    for index in 0..column_count {
        let len = cursor.u64_be()? as usize;
        let name = std::str::from_utf8(cursor.slice(len)?)
            .map_err(|_| DecodeError::InvalidColumnName { index })?;
        column_names.push(name.to_string());
    }

    Ok((row_count, column_count, column_names))
}

/// Decodes a row-data frame into `row_count` rows of `column_count` values.
///
/// Values are read in row-major order, one tag byte plus payload each, in a
/// single forward pass. An unknown tag aborts the decode: the framing of an
/// unrecognized tag cannot be interpreted, so nothing after it can be either.
pub fn decode_rows(
    bytes: &[u8],
    row_count: u64,
    column_count: u64,
) -> Result<Vec<Vec<Value>>, DecodeError> {
    let mut cursor = ByteCursor::new(bytes);

    let mut rows = Vec::with_capacity(row_count.min(bytes.len() as u64) as usize);
    for row in 0..row_count {
        let mut values = Vec::with_capacity(column_count.min(cursor.remaining() as u64) as usize);
        for column in 0..column_count {
            let value = match cursor.u8()? {
                tag::NULL => Value::Null,
                tag::INTEGER => Value::Integer(cursor.i64_be()?),
                tag::FLOAT => Value::Float(cursor.f64_be()?),
                tag::TEXT => {
                    let len = cursor.u64_be()? as usize;
                    let text = std::str::from_utf8(cursor.slice(len)?)
                        .map_err(|_| DecodeError::InvalidText { row, column })?;
                    Value::Text(text.to_string())
                }
                tag::BYTES => {
                    let len = cursor.u64_be()? as usize;
                    Value::Bytes(cursor.slice(len)?.to_vec())
                }
                other => {
                    return Err(DecodeError::UnknownTag {
                        tag: other,
                        row,
                        column,
                    });
                }
            };
            values.push(value);
        }
        rows.push(values);
    }

    Ok(rows)
}

/// Decodes a header/row frame pair into a [`QueryResult`].
///
/// The row frame is interpreted under the counts the header declares, which
/// is what guarantees the result's shape invariants by construction.
pub fn decode_result(header_bytes: &[u8], row_bytes: &[u8]) -> Result<QueryResult, DecodeError> {
    let (row_count, column_count, column_names) = decode_header(header_bytes)?;
    let rows = decode_rows(row_bytes, row_count, column_count)?;
    Ok(QueryResult::new(row_count, column_count, column_names, rows))
}
