//! iCalendar (RFC 5545) text output.

pub mod fold;
pub mod writer;

pub use fold::{fold_line, unfold, MAX_LINE_OCTETS};
pub use writer::serialize;
