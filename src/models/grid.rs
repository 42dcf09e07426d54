//! Grid layout: how items map into rows and columns.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Grid dimensions, independent of the number of items.
///
/// Items fill cells in row-major order; cells without an item render empty
/// and items past the last cell are not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct GridLayout {
    rows: u8,
    columns: u8,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: u8,
    columns: u8,
}

impl TryFrom<RawGrid> for GridLayout {
    type Error = ValidationError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.columns)
    }
}

impl GridLayout {
    /// Largest row count.
    pub const MAX_ROWS: u8 = 4;
    /// Largest column count.
    pub const MAX_COLUMNS: u8 = 3;

    /// Creates a grid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidGrid`] unless `rows` is in `1..=4`
    /// and `columns` is in `1..=3`.
    pub fn new(rows: u8, columns: u8) -> Result<Self, ValidationError> {
        if !(1..=Self::MAX_ROWS).contains(&rows) || !(1..=Self::MAX_COLUMNS).contains(&columns) {
            return Err(ValidationError::InvalidGrid { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Row count.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Column count.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Row and column of the cell at row-major `index`, if it exists.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn position(&self, index: usize) -> Option<(u8, u8)> {
        if index >= self.cell_count() {
            return None;
        }
        let columns = self.columns as usize;
        Some(((index / columns) as u8, (index % columns) as u8))
    }
}

impl Default for GridLayout {
    /// Two by two.
    fn default() -> Self {
        Self {
            rows: 2,
            columns: 2,
        }
    }
}
