use crate::errors::BadRangeError;
use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::Copied,
    slice::Iter,
    str::{self, Utf8Error},
};

/// A non-owning, bounds-checked window over a borrowed byte buffer.
///
/// Equality and hashing look at the viewed bytes only, so two views over
/// different buffers (or different positions of one buffer) compare equal
/// when their content does.
#[derive(Copy, Clone)]
pub struct ByteView<'b> {
    buf: &'b [u8],
    start: usize,
    len: usize,
}

impl<'b> ByteView<'b> {
    /// Views the whole of `buf`.
    #[inline]
    pub const fn new(buf: &'b [u8]) -> Self {
        Self {
            buf,
            start: 0,
            len: buf.len(),
        }
    }

    /// Views `buf[start..start + len]`.
    #[inline]
    pub fn with_range(buf: &'b [u8], start: usize, len: usize) -> Result<Self, BadRangeError> {
        match start.checked_add(len) {
            Some(end) if end <= buf.len() => Ok(Self { buf, start, len }),
            _ => Err(BadRangeError),
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// Sub-view at `offset` (relative to this view) spanning `len` bytes.
    #[inline]
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self, BadRangeError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(Self {
                buf: self.buf,
                start: self.start + offset,
                len,
            }),
            _ => Err(BadRangeError),
        }
    }

    /// Sub-view from `offset` to the end of this view.
    #[inline]
    pub fn slice_from(&self, offset: usize) -> Result<Self, BadRangeError> {
        match self.len.checked_sub(offset) {
            Some(len) => self.slice(offset, len),
            None => Err(BadRangeError),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &'b [u8] {
        &self.buf[self.start..self.start + self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first viewed byte within [`source`](Self::source).
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// The whole underlying buffer this view borrows from.
    #[inline]
    pub fn source(&self) -> &'b [u8] {
        self.buf
    }

    /// Position (relative to this view) of the first `byte` at or after `from`.
    #[inline]
    pub fn index_of(&self, byte: u8, from: usize) -> Option<usize> {
        let bytes = self.as_bytes();
        if from >= bytes.len() {
            return None;
        }
        memchr::memchr(byte, &bytes[from..]).map(|p| p + from)
    }

    /// Zero-copy strict UTF-8 view of the bytes.
    #[inline]
    pub fn to_str(&self) -> Result<&'b str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Decodes the bytes into an owned `String`, replacing invalid sequences
    /// with U+FFFD. The only place a view allocates.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    #[inline]
    pub fn iter(&self) -> Copied<Iter<'b, u8>> {
        self.as_bytes().iter().copied()
    }
}

impl Default for ByteView<'_> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'b> From<&'b [u8]> for ByteView<'b> {
    #[inline]
    fn from(buf: &'b [u8]) -> Self {
        Self::new(buf)
    }
}

impl<'b, const N: usize> From<&'b [u8; N]> for ByteView<'b> {
    #[inline]
    fn from(buf: &'b [u8; N]) -> Self {
        Self::new(buf.as_slice())
    }
}

impl<'b> From<&'b str> for ByteView<'b> {
    #[inline]
    fn from(s: &'b str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'b> IntoIterator for ByteView<'b> {
    type Item = u8;
    type IntoIter = Copied<Iter<'b, u8>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> PartialEq<ByteView<'a>> for ByteView<'b> {
    #[inline]
    fn eq(&self, other: &ByteView<'a>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteView<'_> {}

impl PartialEq<[u8]> for ByteView<'_> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<'a> PartialEq<&'a [u8]> for ByteView<'_> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for ByteView<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<'a> PartialEq<&'a str> for ByteView<'_> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for ByteView<'_> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl fmt::Display for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteView({:?} @ {}..{})",
            String::from_utf8_lossy(self.as_bytes()),
            self.start,
            self.start + self.len
        )
    }
}
