//--------------------------------------------------------------------
// knot.rs
//--------------------------------------------------------------------
// Provides the Knot structure and its side descriptors, the basic
// element stored in a Ring
//--------------------------------------------------------------------

use crate::geometry::*;

/// A single side of a knot: what direction the path/pen takes as it
/// leaves (or arrives at) this knot.
///
/// `Given`/`Curl` exist so a ring built elsewhere with those variants
/// doesn't panic; the core never produces or reads through them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Side {
    /// Marks a path boundary: the one "open end" of a path under
    /// construction, or (transiently, before `brush_make`) every side
    /// of a freshly built pen.
    Regular,
    /// Direction undefined. Used only at the very first knot of a path.
    Open,
    /// An explicit cubic control point.
    Explicit(Vec2),
    Given { tension: Coord, angle: Coord },
    Curl { tension: Coord, curl: Coord },
}

impl Side {
    pub fn is_regular(&self) -> bool { matches!(self, Side::Regular) }

    pub fn explicit(&self) -> Option<Vec2> {
        match self {
            Side::Explicit(v) => Some(*v),
            _ => None,
        }
    }
}

/// A point on a ring (path or pen), with independent side descriptors
/// for the edge arriving from `prev` (`left`) and the edge leaving
/// towards `next` (`right`).
#[derive(Copy, Clone, Debug)]
pub struct Knot {
    pub pos: Vec2,
    pub left: Side,
    pub right: Side,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl Knot {
    pub fn new(pos: Vec2, left: Side, right: Side) -> Knot {
        Knot { pos, left, right, prev: 0, next: 0 }
    }
}
