//! Typed columns and their coercion to text

use super::encoding::normalize_text;
use super::matrix::Matrix;
use crate::config::consts::MISSING_VALUE;
use crate::error::{PopupError, Result};

/// Text form of a single non-missing cell
pub trait CellText {
    fn cell_text(&self) -> String;
}

impl CellText for String {
    fn cell_text(&self) -> String {
        self.clone()
    }
}

impl CellText for i64 {
    fn cell_text(&self) -> String {
        self.to_string()
    }
}

impl CellText for f64 {
    fn cell_text(&self) -> String {
        if self.is_nan() {
            "NaN".to_string()
        } else if self.is_infinite() {
            let sign = if *self > 0.0 { "" } else { "-" };
            format!("{}Inf", sign)
        } else {
            format_significant(*self)
        }
    }
}

/// Significant digits kept when printing a float cell
const FLOAT_DIGITS: usize = 15;

/// Shortest text of `x` rounded to [`FLOAT_DIGITS`] significant digits.
///
/// Fixed notation is used unless scientific notation (`1e+21`, `1.5e-07`)
/// is strictly shorter.
fn format_significant(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:.*e}", FLOAT_DIGITS - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return x.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return x.to_string();
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let scientific = format!(
        "{}{}e{}{:02}",
        sign,
        mantissa,
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    );

    let fixed = if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{}0.{}{}", sign, zeros, digits)
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}{}", sign, digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}{}.{}", sign, &digits[..int_len], &digits[int_len..])
        }
    };

    if fixed.len() <= scientific.len() {
        fixed
    } else {
        scientific
    }
}

impl CellText for bool {
    fn cell_text(&self) -> String {
        let text = if *self { "TRUE" } else { "FALSE" };
        text.to_string()
    }
}

impl CellText for Vec<u8> {
    fn cell_text(&self) -> String {
        normalize_text(self)
    }
}

/// Coercion of a whole column to strings, one entry per cell
pub trait Stringify {
    fn stringify(&self) -> Vec<String>;
}

impl<T: CellText> Stringify for [Option<T>] {
    fn stringify(&self) -> Vec<String> {
        self.iter()
            .map(|cell| match cell {
                Some(value) => value.cell_text(),
                None => MISSING_VALUE.to_string(),
            })
            .collect()
    }
}

/// A column of mixed-type tabular input
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<Option<String>>),
    Integer(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Logical(Vec<Option<bool>>),
    Bytes(Vec<Option<Vec<u8>>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Logical(v) => v.len(),
            Column::Bytes(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::Text(v) => matches!(v.get(row), Some(None)),
            Column::Integer(v) => matches!(v.get(row), Some(None)),
            Column::Float(v) => matches!(v.get(row), Some(None)),
            Column::Logical(v) => matches!(v.get(row), Some(None)),
            Column::Bytes(v) => matches!(v.get(row), Some(None)),
        }
    }
}

impl Stringify for Column {
    fn stringify(&self) -> Vec<String> {
        match self {
            Column::Text(v) => v.stringify(),
            Column::Integer(v) => v.stringify(),
            Column::Float(v) => v.stringify(),
            Column::Logical(v) => v.stringify(),
            Column::Bytes(v) => v.stringify(),
        }
    }
}

/// Named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl DataFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; builder style
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.push(name, column);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, column: Column) {
        self.names.push(name.into());
        self.columns.push(column);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// True when any cell of any column is missing
    pub fn any_missing(&self) -> bool {
        (0..self.n_rows()).any(|row| self.row_has_missing(row))
    }

    /// True when any cell in `row` is missing
    pub fn row_has_missing(&self, row: usize) -> bool {
        self.columns.iter().any(|c| c.is_missing(row))
    }

    /// Stringify every column into a matrix of identical shape
    pub fn to_matrix(&self) -> Result<Matrix> {
        let n_rows = self.n_rows();
        if let Some(bad) = self.columns.iter().find(|c| c.len() != n_rows) {
            return Err(PopupError::dimension("column length", n_rows, bad.len()));
        }

        Matrix::from_columns(self.columns.iter().map(|c| c.stringify()).collect())
    }
}
