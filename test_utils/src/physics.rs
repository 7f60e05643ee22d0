//! Convenience constructors for bodies and grids used in tests.

use glam::Vec2;
use tilebound::{KinematicBody, TileGrid};

/// A point in world units, usually written as an `(x, y)` tuple.
#[derive(Clone, Copy, Debug)]
pub struct Coords2D {
    /// Horizontal position; grows to the right.
    pub x: f32,
    /// Vertical position; grows downwards.
    pub y: f32,
}

impl From<(f32, f32)> for Coords2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of a test body.
#[derive(Clone, Copy, Debug)]
pub struct Extent {
    /// Horizontal size.
    pub width: f32,
    /// Vertical size.
    pub height: f32,
}

impl Extent {
    /// Create a new body extent.
    ///
    /// # Examples
    /// ```
    /// use test_utils::physics::Extent;
    /// let e = Extent::square(12.0);
    /// assert_eq!(e.height, 12.0);
    /// ```
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Build a body that started the tick at `from` and has been displaced to
/// `to`, with its velocity set to the displacement.
///
/// # Panics
/// Panics if the extent is degenerate.
///
/// # Examples
/// ```
/// use test_utils::physics::{body_moving, Extent};
/// let body = body_moving((0.0, 0.0), (0.0, 4.0), Extent::square(12.0));
/// assert_eq!(body.old_bottom(), 12.0);
/// assert_eq!(body.bottom(), 16.0);
/// ```
pub fn body_moving(
    from: impl Into<Coords2D>,
    to: impl Into<Coords2D>,
    extent: Extent,
) -> KinematicBody {
    let start = from.into();
    let end = to.into();
    let mut body = KinematicBody::new(start.x, start.y, extent.width, extent.height)
        .expect("test body extent must be valid");
    body.position = Vec2::new(end.x, end.y);
    body.velocity = body.position - body.old_position;
    body
}

/// Build a `rows` x `columns` grid of empty tiles with the listed
/// `(row, col, code)` cells filled in.
///
/// # Panics
/// Panics if a cell lies outside the grid or a code is above 15.
///
/// # Examples
/// ```
/// use test_utils::physics::grid_with;
/// use tilebound::TileLookup;
/// let grid = grid_with(16.0, 2, 2, &[(1, 0, 15)]);
/// assert_eq!(grid.code_at(1, 0).map(|c| c.raw()), Some(15));
/// ```
pub fn grid_with(tile_size: f32, rows: usize, columns: usize, cells: &[(usize, usize, u8)]) -> TileGrid {
    let mut layout = vec![vec![0_u8; columns]; rows];
    for &(row, col, code) in cells {
        let slot = layout
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .unwrap_or_else(|| panic!("cell ({row}, {col}) outside {rows}x{columns} grid"));
        *slot = code;
    }
    TileGrid::from_rows(tile_size, &layout).expect("test grid must be valid")
}

/// Build a 3x3 grid of 16-unit tiles with `code` at the centre tile (1, 1),
/// which spans `x` and `y` in `[16, 32]`.
///
/// # Examples
/// ```
/// use test_utils::physics::single_tile;
/// use tilebound::TileLookup;
/// let grid = single_tile(4);
/// assert_eq!(grid.code_at(1, 1).map(|c| c.raw()), Some(4));
/// ```
pub fn single_tile(code: u8) -> TileGrid {
    grid_with(16.0, 3, 3, &[(1, 1, code)])
}
