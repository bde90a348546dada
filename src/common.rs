mod byte_view;
mod cfg;

pub use byte_view::*;
pub use cfg::*;
