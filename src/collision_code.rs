//! Per-tile collision codes and the edge-check dispatch table.
//!
//! A code is a 4-bit flag set naming the solid faces of a tile. Read as a
//! binary string from the high bit down the flags are left, bottom, right,
//! top, so `0b0001` is a one-way platform solid only on its top face and
//! `0b1111` is a fully solid block.
//!
//! Which faces are solid is only half of the story: when several faces are
//! solid the order in which they are tested matters, because the first hit
//! repositions the body and later checks would act on a stale position.
//! [`EDGE_CHECKS`] fixes that order for every code.

use thiserror::Error;

/// A face of a tile that can stop a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Upper face; stops bodies falling onto the tile.
    Top,
    /// Right face; stops bodies moving left into the tile.
    Right,
    /// Lower face; stops bodies rising into the tile.
    Bottom,
    /// Left face; stops bodies moving right into the tile.
    Left,
}

impl Edge {
    /// Bit flag that marks this face solid in a [`CollisionCode`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Top => 0b0001,
            Self::Right => 0b0010,
            Self::Bottom => 0b0100,
            Self::Left => 0b1000,
        }
    }
}

/// Ordered edge checks for each of the sixteen codes, indexed by code value.
///
/// Checks stop at the first hit. Vertical faces are tested before horizontal
/// ones where both are present so a body landing on a corner settles before
/// it slides.
pub const EDGE_CHECKS: [&[Edge]; 16] = [
    &[],
    &[Edge::Top],
    &[Edge::Right],
    &[Edge::Top, Edge::Right],
    &[Edge::Bottom],
    &[Edge::Top, Edge::Bottom],
    &[Edge::Right, Edge::Bottom],
    &[Edge::Top, Edge::Right, Edge::Bottom],
    &[Edge::Left],
    &[Edge::Top, Edge::Left],
    &[Edge::Left, Edge::Right],
    &[Edge::Top, Edge::Left, Edge::Right],
    &[Edge::Left, Edge::Bottom],
    &[Edge::Top, Edge::Left, Edge::Bottom],
    &[Edge::Left, Edge::Right, Edge::Bottom],
    &[Edge::Top, Edge::Left, Edge::Right, Edge::Bottom],
];

/// Raised when a raw value does not fit in four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("collision code {0} is outside 0..=15")]
pub struct InvalidCollisionCode(pub u8);

/// Four-bit set of solid tile faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollisionCode(u8);

impl CollisionCode {
    /// No solid faces.
    pub const EMPTY: Self = Self(0);
    /// Solid on all four faces.
    pub const SOLID: Self = Self(15);

    /// Wraps a raw value, rejecting anything above 15.
    ///
    /// # Errors
    /// Returns [`InvalidCollisionCode`] for values outside `0..=15`.
    pub const fn new(raw: u8) -> Result<Self, InvalidCollisionCode> {
        if raw > 15 {
            return Err(InvalidCollisionCode(raw));
        }
        Ok(Self(raw))
    }

    /// The raw four-bit value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// `true` when no face is solid.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when `edge` is solid for this tile.
    #[must_use]
    pub const fn has(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// Edge checks to run for this code, in priority order.
    #[must_use]
    pub fn checks(self) -> &'static [Edge] {
        EDGE_CHECKS
            .get(usize::from(self.0))
            .copied()
            .unwrap_or_default()
    }
}

impl TryFrom<u8> for CollisionCode {
    type Error = InvalidCollisionCode;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<CollisionCode> for u8 {
    fn from(code: CollisionCode) -> Self {
        code.raw()
    }
}
