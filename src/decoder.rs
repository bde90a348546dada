use crate::{common::ByteView, errors::MalformedHeaderError};
use tracing::trace;

const CRLF: &[u8] = b"\r\n";

/// One CRLF-terminated line of a header block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line<'b> {
    /// Line content, terminator excluded.
    pub bytes: ByteView<'b>,
    /// Cursor just past the terminator, relative to the scanned view.
    pub next: usize,
}

/// Finds the line starting at `start` in `block`.
///
/// Returns `Ok(None)` once `start` reaches the end of the block. A non-empty
/// remainder without a CRLF is malformed.
#[inline]
pub fn next_line(block: ByteView<'_>, start: usize) -> Result<Option<Line<'_>>, MalformedHeaderError> {
    let bytes = block.as_bytes();
    if start >= bytes.len() {
        return Ok(None);
    }

    match memchr::memmem::find(&bytes[start..], CRLF) {
        Some(len) => {
            let line = block
                .slice(start, len)
                .map_err(|_| MalformedHeaderError::MissingTerminator { offset: start })?;
            Ok(Some(Line {
                bytes: line,
                next: start + len + CRLF.len(),
            }))
        }
        None => {
            trace!(offset = start, remaining = bytes.len() - start, "no CRLF terminator");
            Err(MalformedHeaderError::MissingTerminator { offset: start })
        }
    }
}

/// Splits a line at its first `:` into name and value.
///
/// The value starts right after the colon and is not trimmed. `offset` is the
/// line position reported if the separator is missing.
#[inline]
pub fn split_header_line(
    line: ByteView<'_>,
    offset: usize,
) -> Result<(ByteView<'_>, ByteView<'_>), MalformedHeaderError> {
    let colon = match line.index_of(b':', 0) {
        Some(p) => p,
        None => {
            trace!(offset = offset, line = ?line, "no ':' separator");
            return Err(MalformedHeaderError::MissingSeparator { offset });
        }
    };

    let bad = |_| MalformedHeaderError::MissingSeparator { offset };
    let name = line.slice(0, colon).map_err(bad)?;
    let value = line.slice_from(colon + 1).map_err(bad)?;
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn lines(block: &[u8]) -> Result<Vec<(String, usize)>, MalformedHeaderError> {
        let view = ByteView::new(block);
        let mut out = Vec::new();
        let mut cursor = 0;
        while let Some(line) = next_line(view, cursor)? {
            out.push((line.bytes.to_text(), line.next));
            cursor = line.next;
        }
        Ok(out)
    }

    #[test]
    fn test_next_line() {
        let good: Vec<(&[u8], Vec<(&str, usize)>)> = vec![
            (b"", vec![]),
            (b"\r\n", vec![("", 2)]),
            (b"a:b\r\n", vec![("a:b", 5)]),
            (b"a:b\r\nc:d\r\n", vec![("a:b", 5), ("c:d", 10)]),
            (b"a:\rb\r\n", vec![("a:\rb", 6)]),
            (b"a:\nb\r\n", vec![("a:\nb", 6)]),
            (b"a:b\r\r\n", vec![("a:b\r", 6)]),
        ];

        for (buf, expected) in &good {
            let got = lines(buf).unwrap();
            let expected: Vec<(String, usize)> =
                expected.iter().map(|(s, n)| (s.to_string(), *n)).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    #[traced_test]
    fn test_next_line_errors() {
        let bad: Vec<(&[u8], usize)> = vec![
            (b"Host: localhost:8080", 0),
            (b"a:b\r\nc:d", 5),
            (b"a:b\r\n\r", 5),
            (b"a:b\n", 0),
            (b"a:b\r\nc:d\n\r", 5),
        ];

        for (buf, offset) in &bad {
            assert_eq!(
                lines(buf),
                Err(MalformedHeaderError::MissingTerminator { offset: *offset })
            );
        }
        assert!(logs_contain("no CRLF terminator"));
    }

    #[test]
    fn test_next_line_from_sub_view() {
        let buf = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
        let block = ByteView::new(buf).slice(16, 9).unwrap();

        let line = next_line(block, 0).unwrap().unwrap();
        assert_eq!(line.bytes, "Host: x");
        assert_eq!(line.bytes.offset(), 16);
        assert_eq!(line.next, 9);
        assert_eq!(next_line(block, line.next).unwrap(), None);
        assert_eq!(next_line(block, 100).unwrap(), None);
    }

    #[test]
    #[traced_test]
    fn test_split_header_line() {
        let (name, value) = split_header_line(ByteView::from("Host: localhost:8080"), 0).unwrap();
        assert_eq!(name, "Host");
        assert_eq!(value, " localhost:8080");
        assert_eq!(value.offset(), 5);

        let (name, value) = split_header_line(ByteView::from("X-Empty:"), 0).unwrap();
        assert_eq!(name, "X-Empty");
        assert!(value.is_empty());

        let (name, value) = split_header_line(ByteView::from(":v"), 0).unwrap();
        assert!(name.is_empty());
        assert_eq!(value, "v");

        assert_eq!(
            split_header_line(ByteView::from("Connection keep-alive"), 7),
            Err(MalformedHeaderError::MissingSeparator { offset: 7 })
        );
        assert_eq!(
            split_header_line(ByteView::empty(), 3),
            Err(MalformedHeaderError::MissingSeparator { offset: 3 })
        );
        assert!(logs_contain("no ':' separator"));
    }
}
