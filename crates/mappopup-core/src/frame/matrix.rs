//! Row-major string matrix handed to the renderers

use crate::error::{PopupError, Result};

/// Total cell count of a shape; a product beyond `usize` is a shape error.
fn cell_count(n_rows: usize, n_cols: usize) -> Result<usize> {
    n_rows
        .checked_mul(n_cols)
        .ok_or_else(|| PopupError::dimension("matrix shape overflows usize", usize::MAX, n_rows))
}

/// Rectangular row-major table of string cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<String>,
}

impl Matrix {
    /// Build from row-major cells. `cells.len()` must be `n_rows * n_cols`.
    pub fn new(n_rows: usize, n_cols: usize, cells: Vec<String>) -> Result<Self> {
        let expected = cell_count(n_rows, n_cols)?;
        if cells.len() != expected {
            return Err(PopupError::dimension("matrix cells", expected, cells.len()));
        }
        Ok(Self {
            n_rows,
            n_cols,
            cells,
        })
    }

    /// Build from rows; every row must have the length of the first one.
    pub fn from_rows<R, S>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut n_rows = 0;
        let mut n_cols = None;
        let mut cells = Vec::new();

        for row in rows {
            let before = cells.len();
            cells.extend(row.into_iter().map(Into::into));
            let width = cells.len() - before;

            match n_cols {
                None => n_cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(PopupError::dimension("matrix row width", expected, width));
                }
                Some(_) => {}
            }
            n_rows += 1;
        }

        Ok(Self {
            n_rows,
            n_cols: n_cols.unwrap_or(0),
            cells,
        })
    }

    /// Build from equally long columns.
    pub fn from_columns(columns: Vec<Vec<String>>) -> Result<Self> {
        let n_cols = columns.len();
        let n_rows = columns.first().map_or(0, Vec::len);

        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(PopupError::dimension("column length", n_rows, bad.len()));
        }

        let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let mut cells = Vec::with_capacity(cell_count(n_rows, n_cols)?);
        for _ in 0..n_rows {
            for column in iters.iter_mut() {
                cells.extend(column.next());
            }
        }

        Ok(Self {
            n_rows,
            n_cols,
            cells,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        if index >= self.n_rows {
            return None;
        }
        let start = index * self.n_cols;
        Some(&self.cells[start..start + self.n_cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if col >= self.n_cols {
            return None;
        }
        self.row(row).map(|r| r[col].as_str())
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        (0..self.n_rows).map(move |i| {
            let start = i * self.n_cols;
            &self.cells[start..start + self.n_cols]
        })
    }
}
