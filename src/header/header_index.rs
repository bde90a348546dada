use crate::{
    common::{ByteView, HeaderCfg},
    errors::{IntoHeaderMapError, MalformedHeaderError},
    header::{Header, HeaderCursor, HeaderIterator, HeaderValue},
};
use bytes::BytesMut;
use tracing::trace;

/// A lazily parsed block of CRLF-terminated `Name:value` lines.
///
/// Nothing is parsed on construction. Every `count`, `get` or iteration
/// scans the borrowed block from the start and fails on the first line that
/// lacks a CRLF terminator or a `:` separator.
#[derive(Debug, Copy, Clone)]
pub struct HeaderIndex<'b> {
    source: ByteView<'b>,
    cfg: HeaderCfg,
}

impl<'b> HeaderIndex<'b> {
    #[inline]
    pub fn new(source: impl Into<ByteView<'b>>) -> Self {
        Self::with_cfg(source, HeaderCfg::default())
    }

    #[inline]
    pub fn with_cfg(source: impl Into<ByteView<'b>>, cfg: HeaderCfg) -> Self {
        Self {
            source: source.into(),
            cfg,
        }
    }

    #[inline]
    pub fn source(&self) -> ByteView<'b> {
        self.source
    }

    #[inline]
    pub fn cfg(&self) -> &HeaderCfg {
        &self.cfg
    }

    /// Number of header lines in the block.
    pub fn count(&self) -> Result<usize, MalformedHeaderError> {
        let mut cursor = self.cursor();
        let mut n = 0;
        while cursor.advance()? {
            n += 1;
        }
        Ok(n)
    }

    /// Checks the whole block against the line grammar.
    #[inline]
    pub fn validate(&self) -> Result<(), MalformedHeaderError> {
        self.count().map(|_| ())
    }

    /// Value of the first header named `name`, or an empty value if there is
    /// none. The rest of the block is still validated after a match.
    pub fn get(&self, name: &str) -> Result<HeaderValue<'b>, MalformedHeaderError> {
        let mut cursor = self.cursor();
        let mut found = None;

        while cursor.advance()? {
            if found.is_some() {
                continue;
            }
            if let Some(hdr) = cursor.current() {
                if hdr.name.matches(name, self.cfg.name_match) {
                    found = Some(hdr.value);
                }
            }
        }

        match found {
            Some(value) => {
                trace!(name, len = value.len(), "header found");
                Ok(value)
            }
            None => {
                trace!(name, "header not found");
                Ok(HeaderValue::default())
            }
        }
    }

    #[inline]
    pub fn iter(&self) -> HeaderIterator<'b> {
        HeaderIterator::new(self.source)
    }

    #[inline]
    pub fn cursor(&self) -> HeaderCursor<'b> {
        HeaderCursor::new(self.source)
    }

    /// Writes every header back as `name:value\r\n`, bytes unchanged.
    /// Nothing is written if the block is malformed.
    pub fn encode(&self, wbuf: &mut BytesMut) -> Result<(), MalformedHeaderError> {
        self.validate()?;
        wbuf.reserve(self.source.len());
        for hdr in self.iter() {
            let hdr = hdr?;
            wbuf.extend_from_slice(hdr.name.as_bytes());
            wbuf.extend_from_slice(b":");
            wbuf.extend_from_slice(hdr.value.as_bytes());
            wbuf.extend_from_slice(b"\r\n");
        }
        Ok(())
    }

    /// Copies the headers into an [`http::HeaderMap`], keeping duplicates
    /// as separate entries. Values are taken verbatim.
    pub fn to_header_map(&self) -> Result<http::HeaderMap, IntoHeaderMapError> {
        let mut map = http::HeaderMap::with_capacity(self.count()?);
        for hdr in self.iter() {
            let hdr = hdr?;
            let name = http::header::HeaderName::from_bytes(hdr.name.as_bytes())?;
            let value = http::header::HeaderValue::from_bytes(hdr.value.as_bytes())?;
            map.append(name, value);
        }
        Ok(map)
    }
}

impl<'b> From<ByteView<'b>> for HeaderIndex<'b> {
    #[inline]
    fn from(source: ByteView<'b>) -> Self {
        Self::new(source)
    }
}

impl<'b> From<&'b [u8]> for HeaderIndex<'b> {
    #[inline]
    fn from(source: &'b [u8]) -> Self {
        Self::new(source)
    }
}

impl<'b> From<&'b str> for HeaderIndex<'b> {
    #[inline]
    fn from(source: &'b str) -> Self {
        Self::new(source)
    }
}

impl<'b> IntoIterator for HeaderIndex<'b> {
    type Item = Result<Header<'b>, MalformedHeaderError>;
    type IntoIter = HeaderIterator<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b> IntoIterator for &HeaderIndex<'b> {
    type Item = Result<Header<'b>, MalformedHeaderError>;
    type IntoIter = HeaderIterator<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
