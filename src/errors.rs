use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("byte range out of bounds")]
#[non_exhaustive]
pub struct BadRangeError;

/// A header block that violates the line grammar.
///
/// `offset` is the position, within the header block, of the first byte of
/// the offending line.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MalformedHeaderError {
    #[error("header line at offset {offset} has no CRLF terminator")]
    MissingTerminator { offset: usize },
    #[error("header line at offset {offset} has no ':' separator")]
    MissingSeparator { offset: usize },
}

impl MalformedHeaderError {
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Self::MissingTerminator { offset } => offset,
            Self::MissingSeparator { offset } => offset,
        }
    }

    #[inline]
    pub fn is_missing_terminator(self) -> bool {
        matches!(self, Self::MissingTerminator { .. })
    }

    #[inline]
    pub fn is_missing_separator(self) -> bool {
        matches!(self, Self::MissingSeparator { .. })
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntoHeaderMapError {
    #[error(transparent)]
    Malformed(#[from] MalformedHeaderError),
    #[error("invalid header name: {0}")]
    InvalidName(#[from] http::header::InvalidHeaderName),
    #[error("invalid header value: {0}")]
    InvalidValue(#[from] http::header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_accessors() {
        let e = MalformedHeaderError::MissingTerminator { offset: 12 };
        assert_eq!(e.offset(), 12);
        assert!(e.is_missing_terminator());
        assert!(!e.is_missing_separator());
        assert_eq!(e.to_string(), "header line at offset 12 has no CRLF terminator");

        let e = MalformedHeaderError::MissingSeparator { offset: 0 };
        assert_eq!(e.offset(), 0);
        assert!(e.is_missing_separator());
        assert_eq!(e.to_string(), "header line at offset 0 has no ':' separator");
    }

    #[test]
    fn test_into_header_map_error_from() {
        let e: IntoHeaderMapError = MalformedHeaderError::MissingSeparator { offset: 3 }.into();
        assert!(matches!(
            e,
            IntoHeaderMapError::Malformed(MalformedHeaderError::MissingSeparator { offset: 3 })
        ));
    }
}
