//! Popup table rows
//!
//! - [`format`] renders one label/value pair in one of three [`RowVariant`]s
//! - [`merge`] walks a record, picks the variant per field and concatenates rows

pub mod format;
pub mod merge;

pub use format::{format_row, RowOptions, RowVariant};
pub use merge::{merge, merge_with, select_variant, ReservedFields};
