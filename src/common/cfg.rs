/// How a requested header name is compared with the names in a block.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
#[non_exhaustive]
pub enum NameMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    IgnoreAsciiCase,
}

impl NameMatch {
    #[inline]
    pub fn matches(self, a: &[u8], b: &[u8]) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreAsciiCase => a.eq_ignore_ascii_case(b),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct HeaderCfg {
    pub name_match: NameMatch,
}

impl HeaderCfg {
    #[inline]
    pub fn builder() -> HeaderCfgBuilder {
        HeaderCfgBuilder::default()
    }
}

#[derive(Debug, Default)]
#[non_exhaustive]
pub struct HeaderCfgBuilder {
    name_match: NameMatch,
}

impl HeaderCfgBuilder {
    #[inline]
    pub fn name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn build(self) -> HeaderCfg {
        HeaderCfg {
            name_match: self.name_match,
        }
    }
}
