use std::fmt;

use crate::store::StoreError;

/// A command result, rendered for the interactive session. This is the
/// printable counterpart of the wire frame a networked server would send.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// Plain success acknowledgment, rendered as `OK`.
    Ok,
    /// A not-found or no-value result, rendered as `(nil)`.
    Nil,
    Integer(i64),
    /// A single string result, rendered double-quoted.
    Bulk(String),
    /// A range result, rendered as a numbered list or `(empty array)`.
    Array(Vec<String>),
    /// Any failure. The message carries its own leading token (`WRONGTYPE`,
    /// `ERR`, ...).
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Nil => write!(f, "(nil)"),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Bulk(s) => write!(f, "\"{}\"", s),
            Reply::Array(items) if items.is_empty() => write!(f, "(empty array)"),
            Reply::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) \"{}\"", i + 1, item)?;
                }
                Ok(())
            }
            Reply::Error(message) => write!(f, "(error) {}", message),
        }
    }
}

impl From<StoreError> for Reply {
    fn from(err: StoreError) -> Reply {
        Reply::Error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_ok() {
        assert_eq!(Reply::Ok.to_string(), "OK");
    }

    #[test]
    fn render_nil() {
        assert_eq!(Reply::Nil.to_string(), "(nil)");
    }

    #[test]
    fn render_integer() {
        assert_eq!(Reply::Integer(3).to_string(), "(integer) 3");
        assert_eq!(Reply::Integer(0).to_string(), "(integer) 0");
    }

    #[test]
    fn render_bulk() {
        assert_eq!(Reply::Bulk("value1".to_string()).to_string(), "\"value1\"");
        assert_eq!(Reply::Bulk(String::new()).to_string(), "\"\"");
    }

    #[test]
    fn render_array() {
        let reply = Reply::Array(vec!["c".to_string(), "b".to_string(), "a".to_string()]);

        assert_eq!(reply.to_string(), "1) \"c\"\n2) \"b\"\n3) \"a\"");
    }

    #[test]
    fn render_empty_array() {
        assert_eq!(Reply::Array(Vec::new()).to_string(), "(empty array)");
    }

    #[test]
    fn render_error() {
        assert_eq!(
            Reply::Error("ERR syntax error".to_string()).to_string(),
            "(error) ERR syntax error"
        );
    }

    #[test]
    fn render_wrong_type_error() {
        assert_eq!(
            Reply::from(StoreError::WrongType).to_string(),
            "(error) WRONGTYPE Operation against a key holding the wrong kind of value"
        );
    }
}
