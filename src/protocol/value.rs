use std::fmt;

/// Wire tags identifying each value variant on a row-data frame.
pub(crate) mod tag {
    pub const NULL: u8 = 0;
    pub const INTEGER: u8 = 1;
    pub const FLOAT: u8 = 2;
    pub const TEXT: u8 = 3;
    pub const BYTES: u8 = 4;
}

/// A single typed cell of a query result.
///
/// Exactly one tag byte precedes each value on the wire; the tag set is
/// closed, and a frame carrying any other tag is rejected as malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// The wire tag for this variant.
    pub fn tag(&self) -> u8 {
        match self {
            Value::Null => tag::NULL,
            Value::Integer(_) => tag::INTEGER,
            Value::Float(_) => tag::FLOAT,
            Value::Text(_) => tag::TEXT,
            Value::Bytes(_) => tag::BYTES,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_wire_assignments() {
        assert_eq!(Value::Null.tag(), 0);
        assert_eq!(Value::Integer(1).tag(), 1);
        assert_eq!(Value::Float(1.0).tag(), 2);
        assert_eq!(Value::Text("a".into()).tag(), 3);
        assert_eq!(Value::Bytes(vec![0xff]).tag(), 4);
    }

    #[test]
    fn display_renders_null_and_scalars() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("alice".into()).to_string(), "alice");
        assert_eq!(Value::Bytes(b"raw".to_vec()).to_string(), "raw");
    }
}
