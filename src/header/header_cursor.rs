use crate::{
    common::ByteView,
    decoder::{next_line, split_header_line},
    errors::MalformedHeaderError,
    header::{Header, HeaderName, HeaderValue},
};
use std::iter::FusedIterator;

/// A forward-only position in a header block.
///
/// `current` only changes on `advance`; a copy of the cursor continues
/// independently from the same position.
#[derive(Debug, Copy, Clone)]
pub struct HeaderCursor<'b> {
    block: ByteView<'b>,
    next: usize,
    current: Option<Header<'b>>,
}

impl<'b> HeaderCursor<'b> {
    #[inline]
    pub(crate) fn new(block: ByteView<'b>) -> Self {
        Self {
            block,
            next: 0,
            current: None,
        }
    }

    /// The header decoded by the last successful `advance`.
    #[inline]
    pub fn current(&self) -> Option<Header<'b>> {
        self.current
    }

    /// Byte offset, within the block, of the next line to be scanned.
    #[inline]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Moves to the next header. Returns `Ok(false)` once the block is
    /// exhausted. An error ends the scan: later calls return `Ok(false)`.
    pub fn advance(&mut self) -> Result<bool, MalformedHeaderError> {
        self.current = None;
        let line = match next_line(self.block, self.next) {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(false),
            Err(e) => {
                self.next = self.block.len();
                return Err(e);
            }
        };

        match split_header_line(line.bytes, self.next) {
            Ok((name, value)) => {
                self.next = line.next;
                self.current = Some(Header {
                    name: HeaderName::new(name),
                    value: HeaderValue::new(value),
                });
                Ok(true)
            }
            Err(e) => {
                self.next = self.block.len();
                Err(e)
            }
        }
    }
}

/// Iterator over the headers of a block, in source order.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct HeaderIterator<'b> {
    cursor: HeaderCursor<'b>,
}

impl<'b> HeaderIterator<'b> {
    #[inline]
    pub(crate) fn new(block: ByteView<'b>) -> Self {
        Self {
            cursor: HeaderCursor::new(block),
        }
    }
}

impl<'b> Iterator for HeaderIterator<'b> {
    type Item = Result<Header<'b>, MalformedHeaderError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.advance() {
            Ok(true) => self.cursor.current().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl FusedIterator for HeaderIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &[u8] = b"Host: localhost:8080\r\nConnection: keep-alive\r\n";

    #[test]
    fn test_current_is_stable_until_advance() {
        let mut cursor = HeaderCursor::new(ByteView::new(BLOCK));
        assert!(cursor.current().is_none());

        assert_eq!(cursor.advance(), Ok(true));
        let current = cursor.current();
        assert_eq!(current, cursor.current());
        assert_eq!(current.as_ref().map(|h| h.name.to_text()), Some("Host".into()));
        assert_eq!(cursor.position(), 22);

        assert_eq!(cursor.advance(), Ok(true));
        assert_ne!(current, cursor.current());

        assert_eq!(cursor.advance(), Ok(false));
        assert!(cursor.current().is_none());
        assert_eq!(cursor.advance(), Ok(false));
    }

    #[test]
    fn test_copied_cursor_is_independent() {
        let mut a = HeaderCursor::new(ByteView::new(BLOCK));
        a.advance().unwrap();
        let mut b = a;

        b.advance().unwrap();
        assert_eq!(a.current().unwrap().name, "Host");
        assert_eq!(b.current().unwrap().name, "Connection");
    }

    #[test]
    fn test_error_is_terminal() {
        let block = b"A: 1\r\nBroken\r\nC: 3\r\n";
        let mut cursor = HeaderCursor::new(ByteView::new(block));

        assert_eq!(cursor.advance(), Ok(true));
        assert_eq!(
            cursor.advance(),
            Err(MalformedHeaderError::MissingSeparator { offset: 6 })
        );
        assert!(cursor.current().is_none());
        assert_eq!(cursor.advance(), Ok(false));

        let mut iter = HeaderIterator::new(ByteView::new(block));
        assert!(matches!(iter.next(), Some(Ok(_))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
