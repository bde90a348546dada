use crate::common::ByteView;
use std::{fmt, iter::Copied, slice::Iter};

/// The raw bytes after the first `:` of a header line, leading whitespace
/// included. An absent header is represented by an empty value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct HeaderValue<'b> {
    pub(crate) value: ByteView<'b>,
}

impl<'b> HeaderValue<'b> {
    #[inline]
    pub(crate) fn new(value: ByteView<'b>) -> Self {
        Self { value }
    }

    #[inline]
    pub fn as_bytes(&self) -> &'b [u8] {
        self.value.as_bytes()
    }

    #[inline]
    pub fn as_view(&self) -> ByteView<'b> {
        self.value
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    pub fn to_text(&self) -> String {
        self.value.to_text()
    }
}

impl<'b> IntoIterator for HeaderValue<'b> {
    type Item = u8;
    type IntoIter = Copied<Iter<'b, u8>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

impl<'a> PartialEq<&'a str> for HeaderValue<'_> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.value == *other
    }
}

impl<'a> PartialEq<&'a [u8]> for HeaderValue<'_> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.value == *other
    }
}

impl fmt::Display for HeaderValue<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
