//! Static level geometry as a grid of collision codes.

use thiserror::Error;

use crate::collision_code::{CollisionCode, InvalidCollisionCode};
use crate::numeric::span;

/// Errors raised while building a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Tile size was zero, negative, or not finite.
    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    Empty {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// The code list does not fill `rows * columns` cells.
    #[error("expected {expected} collision codes for the grid, found {found}")]
    CellCount {
        /// `rows * columns`.
        expected: usize,
        /// Length of the supplied code list.
        found: usize,
    },
    /// A row in a nested layout has a different length from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Offending row index.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A cell held a value above 15.
    #[error("cell {index}: {source}")]
    Code {
        /// Row-major index of the offending cell.
        index: usize,
        /// Underlying range error.
        source: InvalidCollisionCode,
    },
}

/// Read access to tile collision data, as used by the resolver.
#[cfg_attr(test, mockall::automock)]
pub trait TileLookup {
    /// Edge length of one square tile.
    fn tile_size(&self) -> f32;

    /// Code stored at `(row, col)`, or `None` when outside the grid.
    fn code_at(&self, row: usize, col: usize) -> Option<CollisionCode>;

    /// Width of the world covered by the tiles.
    fn width(&self) -> f32;

    /// Height of the world covered by the tiles.
    fn height(&self) -> f32;
}

/// Rectangular, fully populated grid of collision codes.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    rows: usize,
    columns: usize,
    tile_size: f32,
    codes: Vec<CollisionCode>,
}

impl TileGrid {
    /// Builds a grid from row-major raw codes.
    ///
    /// # Errors
    /// Returns [`GridError`] when the tile size is unusable, the grid is
    /// empty, the code count does not match the dimensions, or a code is
    /// above 15.
    pub fn new(
        rows: usize,
        columns: usize,
        tile_size: f32,
        raw_codes: &[u8],
    ) -> Result<Self, GridError> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(GridError::InvalidTileSize(tile_size));
        }
        if rows == 0 || columns == 0 {
            return Err(GridError::Empty { rows, columns });
        }
        let expected = rows.saturating_mul(columns);
        if raw_codes.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw_codes.len(),
            });
        }
        let codes = raw_codes
            .iter()
            .enumerate()
            .map(|(index, &raw)| {
                CollisionCode::new(raw).map_err(|source| GridError::Code { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows,
            columns,
            tile_size,
            codes,
        })
    }

    /// Builds a grid from a nested row layout, as written by hand in tests and
    /// level sources.
    ///
    /// # Errors
    /// Returns [`GridError::Ragged`] when rows differ in length, plus every
    /// error [`TileGrid::new`] can return.
    pub fn from_rows<R: AsRef<[u8]>>(tile_size: f32, layout: &[R]) -> Result<Self, GridError> {
        let columns = layout.first().map_or(0, |row| row.as_ref().len());
        let mut flat = Vec::with_capacity(columns * layout.len());
        for (row, cells) in layout.iter().enumerate() {
            let row_cells = cells.as_ref();
            if row_cells.len() != columns {
                return Err(GridError::Ragged {
                    row,
                    expected: columns,
                    found: row_cells.len(),
                });
            }
            flat.extend_from_slice(row_cells);
        }
        Self::new(layout.len(), columns, tile_size, &flat)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Width of the grid in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        span(self.columns, self.tile_size)
    }

    /// Height of the grid in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        span(self.rows, self.tile_size)
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn codes(&self) -> &[CollisionCode] {
        &self.codes
    }
}

impl TileLookup for TileGrid {
    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn code_at(&self, row: usize, col: usize) -> Option<CollisionCode> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.codes.get(row * self.columns + col).copied()
    }

    fn width(&self) -> f32 {
        span(self.columns, self.tile_size)
    }

    fn height(&self) -> f32 {
        span(self.rows, self.tile_size)
    }
}
