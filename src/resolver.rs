//! Tile and world-bounds collision resolution.
//!
//! Every check here is a swept discrete test: a face only stops a body when
//! the matching body edge was on the open side of the face at the start of
//! the tick and is past it now. A body that begins a tick already overlapping
//! a face is left alone, and a body that crosses a face within one tick is
//! caught as long as its displacement stays under one tile.

use log::{debug, trace};

use crate::body::KinematicBody;
use crate::collision_code::{CollisionCode, Edge};
use crate::constants::EDGE_EPSILON;
use crate::grid::TileLookup;
use crate::numeric::tile_index;

/// A tile face that stopped a body during [`resolve_tile_collisions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Face of the tile that was hit.
    pub edge: Edge,
    /// Row of the tile.
    pub row: usize,
    /// Column of the tile.
    pub col: usize,
}

/// Sides of the world a body was clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per world side reads better than a bit set here."
)]
pub struct BoundsContact {
    /// Clamped at `x = 0`.
    pub left: bool,
    /// Clamped at `x = world_width`.
    pub right: bool,
    /// Clamped at `y = 0`.
    pub top: bool,
    /// Clamped at `y = world_height`.
    pub bottom: bool,
}

impl BoundsContact {
    /// `true` when any side clamped.
    #[must_use]
    pub const fn any(self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Keeps a body inside `[0, world_width] x [0, world_height]`.
///
/// Each edge past a bound is snapped to it and the velocity on that axis is
/// zeroed. Touching the floor also ends a jump.
pub fn resolve_world_bounds(
    body: &mut KinematicBody,
    world_width: f32,
    world_height: f32,
) -> BoundsContact {
    let mut contact = BoundsContact::default();

    if body.left() < 0.0 {
        body.set_left(0.0);
        body.velocity.x = 0.0;
        contact.left = true;
    } else if body.right() > world_width {
        body.set_right(world_width);
        body.velocity.x = 0.0;
        contact.right = true;
    }

    if body.top() < 0.0 {
        body.set_top(0.0);
        body.velocity.y = 0.0;
        contact.top = true;
    } else if body.bottom() > world_height {
        body.set_bottom(world_height);
        body.velocity.y = 0.0;
        body.airborne = false;
        contact.bottom = true;
    }

    contact
}

/// Stops a body rising through a tile's lower face.
pub fn check_bottom_edge(body: &mut KinematicBody, tile_bottom: f32) -> bool {
    if body.top() < tile_bottom && body.old_top() >= tile_bottom {
        body.set_top(tile_bottom);
        body.velocity.y = 0.0;
        return true;
    }
    false
}

/// Stops a body moving right through a tile's left face.
pub fn check_left_edge(body: &mut KinematicBody, tile_left: f32) -> bool {
    if body.right() > tile_left && body.old_right() <= tile_left {
        body.set_right(tile_left - EDGE_EPSILON);
        body.velocity.x = 0.0;
        return true;
    }
    false
}

/// Stops a body moving left through a tile's right face.
pub fn check_right_edge(body: &mut KinematicBody, tile_right: f32) -> bool {
    if body.left() < tile_right && body.old_left() >= tile_right {
        body.set_left(tile_right);
        body.velocity.x = 0.0;
        return true;
    }
    false
}

/// Lands a body falling through a tile's upper face.
pub fn check_top_edge(body: &mut KinematicBody, tile_top: f32) -> bool {
    if body.bottom() > tile_top && body.old_bottom() <= tile_top {
        body.set_bottom(tile_top - EDGE_EPSILON);
        body.velocity.y = 0.0;
        body.airborne = false;
        return true;
    }
    false
}

/// World-space bounds of the tile at `(row, col)`.
#[derive(Debug, Clone, Copy)]
struct TileBounds {
    left: f32,
    top: f32,
    size: f32,
}

impl TileBounds {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Grid indices are far below f32's exact integer range."
    )]
    fn at(row: usize, col: usize, size: f32) -> Self {
        Self {
            left: col as f32 * size,
            top: row as f32 * size,
            size,
        }
    }

    fn face(self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.top + self.size,
            Edge::Left => self.left,
            Edge::Right => self.left + self.size,
        }
    }
}

fn check_edge(body: &mut KinematicBody, edge: Edge, tile: TileBounds) -> bool {
    let face = tile.face(edge);
    match edge {
        Edge::Top => check_top_edge(body, face),
        Edge::Right => check_right_edge(body, face),
        Edge::Bottom => check_bottom_edge(body, face),
        Edge::Left => check_left_edge(body, face),
    }
}

/// Runs the checks for one tile in table order, stopping at the first hit.
pub fn resolve_tile(
    body: &mut KinematicBody,
    code: CollisionCode,
    row: usize,
    col: usize,
    tile_size: f32,
) -> Option<Contact> {
    let tile = TileBounds::at(row, col, tile_size);
    code.checks()
        .iter()
        .copied()
        .find(|&edge| check_edge(body, edge, tile))
        .map(|edge| Contact { edge, row, col })
}

/// The four bounding-box corners, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const PROBE_ORDER: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    fn point(self, body: &KinematicBody) -> (f32, f32) {
        match self {
            Self::TopLeft => (body.left(), body.top()),
            Self::TopRight => (body.right(), body.top()),
            Self::BottomLeft => (body.left(), body.bottom()),
            Self::BottomRight => (body.right(), body.bottom()),
        }
    }
}

/// Resolves a body against the grid by probing its four corners.
///
/// Corners are probed top-left, top-right, bottom-left, bottom-right, and
/// each probe reads the body's edges afresh because an earlier probe may have
/// moved it. Probes that fall outside the grid are treated as empty tiles.
/// Returns the contacts in probe order, at most one per corner.
pub fn resolve_tile_collisions<G>(body: &mut KinematicBody, grid: &G) -> Vec<Contact>
where
    G: TileLookup + ?Sized,
{
    let tile_size = grid.tile_size();
    let mut contacts = Vec::new();

    for corner in Corner::PROBE_ORDER {
        let (x, y) = corner.point(body);
        let (Some(row), Some(col)) = (tile_index(y, tile_size), tile_index(x, tile_size)) else {
            trace!("{corner:?} probe at ({x}, {y}) is left of or above the grid");
            continue;
        };
        let Some(code) = grid.code_at(row, col) else {
            trace!("{corner:?} probe at ({row}, {col}) is outside the grid");
            continue;
        };
        if code.is_empty() {
            continue;
        }
        if let Some(contact) = resolve_tile(body, code, row, col, tile_size) {
            debug!(
                "{corner:?} hit {:?} face of tile ({row}, {col}) code {}",
                contact.edge,
                code.raw()
            );
            contacts.push(contact);
        }
    }

    contacts
}
