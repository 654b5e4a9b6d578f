//! Domain logic - pure release-note rules independent of the hosting API

pub mod category;
pub mod tag;

pub use category::CategoryKey;
pub use tag::{header_line, ParsedTag};
