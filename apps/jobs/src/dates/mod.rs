//! Date string conversion between the feed's formats and display formats.
//!
//! A conversion is a parse followed by a render. No timezone arithmetic is
//! ever applied: the wall-clock fields of the input come out unchanged.

pub mod converter;
pub mod format;

pub use converter::{convert, DateConverter};
pub use format::{DateFormat, Timestamp};
