use crate::common::{ByteView, NameMatch};
use std::{fmt, str::Utf8Error};

/// The bytes before the first `:` of a header line, as written on the wire.
///
/// Comparisons against strings are exact; use [`matches`](Self::matches) for
/// case-insensitive checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct HeaderName<'b>(pub(crate) ByteView<'b>);

impl<'b> HeaderName<'b> {
    #[inline]
    pub(crate) fn new(name: ByteView<'b>) -> Self {
        Self(name)
    }

    #[inline]
    pub fn as_str(&self) -> Result<&'b str, Utf8Error> {
        self.0.to_str()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'b [u8] {
        self.0.as_bytes()
    }

    #[inline]
    pub fn as_view(&self) -> ByteView<'b> {
        self.0
    }

    #[inline]
    pub fn to_text(&self) -> String {
        self.0.to_text()
    }

    #[inline]
    pub fn matches(&self, name: &str, how: NameMatch) -> bool {
        how.matches(self.as_bytes(), name.as_bytes())
    }
}

impl<'a> PartialEq<&'a str> for HeaderName<'_> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

impl<'a> PartialEq<&'a [u8]> for HeaderName<'_> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for HeaderName<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_eq() {
        let name = HeaderName::new(ByteView::from("Content-Type"));

        assert_eq!(name, name.clone());
        assert_eq!(name, "Content-Type");
        assert_ne!(name, "content-type");
        assert_eq!(name, &b"Content-Type"[..]);
        assert_eq!(name.as_str(), Ok("Content-Type"));
        assert_eq!(name.to_string(), "Content-Type");
    }

    #[test]
    fn test_matches() {
        let name = HeaderName::new(ByteView::from("Content-Type"));

        assert!(name.matches("Content-Type", NameMatch::Exact));
        assert!(!name.matches("content-type", NameMatch::Exact));
        assert!(name.matches("content-TYPE", NameMatch::IgnoreAsciiCase));
        assert!(!name.matches("Content-Typ", NameMatch::IgnoreAsciiCase));
    }
}
