mod header_cursor;
mod header_index;
mod header_name;
mod header_value;

pub use header_cursor::*;
pub use header_index::*;
pub use header_name::*;
pub use header_value::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub struct Header<'b> {
    pub name: HeaderName<'b>,
    pub value: HeaderValue<'b>,
}

impl Header<'_> {
    /// Position of the header line within the underlying buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.name.as_view().offset()
    }
}
