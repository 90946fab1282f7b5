//! Tabular input: typed columns, their string coercion and the string matrix
//! consumed by the renderers.

pub mod column;
pub mod encoding;
pub mod matrix;

pub use column::{CellText, Column, DataFrame, Stringify};
pub use encoding::normalize_text;
pub use matrix::Matrix;
