//! Client side of the Sequent query protocol.
//!
//! This module implements the wire format spoken by Sequent servers and the
//! transport used to reach them. A query is sent as a single message of raw
//! UTF-8 text; the reply is exactly two frames, a header frame describing the
//! result set followed by a row-data frame carrying the values. Both frames
//! are decoded into a [`QueryResult`] before anything is handed back to the
//! application.
//!
//! # Overview
//!
//! The protocol is strictly synchronous request/reply: one outstanding query
//! per connection, replies delivered in order. Decoding is a single forward
//! pass over each frame with no backtracking; any deviation from the format
//! below aborts the decode wholesale and surfaces as a
//! [`DecodeError`] — a partial result is never produced.
//!
//! # Key Components
//!
//! - [`QueryClient`]: Owns the connection, sends queries and decodes replies.
//! - [`ByteCursor`]: Bounds-checked forward-only reader the decoder is built on.
//! - [`QueryResult`]: Immutable decoded result set.
//! - [`MessageTransport`]: Length-prefixed message framing over a byte stream.
//!
//! # Binary Format
//!
//! All multi-byte integers and floats are big-endian.
//!
//! A header frame opens with the 4-byte magic `"SQNT"`, then the row count
//! and column count as unsigned 64-bit integers, then one length-prefixed
//! UTF-8 name per column.
//!
//! A row-data frame carries `row_count * column_count` values in row-major
//! order. Each value is a single tag byte followed by its payload: `0` null
//! (no payload), `1` a signed 64-bit integer, `2` a 64-bit float, `3` a
//! length-prefixed UTF-8 string, `4` a length-prefixed raw byte sequence.
mod client;
mod cursor;
mod decoder;
mod encoder;
mod result;
mod transport;
mod value;

pub use client::{ClientError, QueryClient};
pub use cursor::{ByteCursor, Truncated};
pub use decoder::{DecodeError, MAGIC, decode_header, decode_result, decode_rows};
pub use encoder::{encode_header, encode_rows};
pub use result::QueryResult;
pub use transport::{MAX_MESSAGE_SIZE, MessageTransport, TransportError};
pub use value::Value;
