//------------------------------------------------------------------------------
// builders.rs
//------------------------------------------------------------------------------
// Turns a sequence of moveto/lineto/curveto/pathclose calls directly
// into a path Ring, generalizing the command-replay pattern the
// original command-list walker used
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::knot::*;
use crate::ring::*;

/// Incrementally builds a path ring. A path always has exactly one
/// knot with `right = Regular` -- the "open end" currently being
/// extended -- until the builder is consumed.
pub struct PathBuilder {
    ring: Ring,
    first: NodeId,
    current: NodeId,
    start_pos: Vec2,
}

impl PathBuilder {
    /// Starts a new path at `pos`.
    pub fn moveto(pos: Vec2) -> PathBuilder {
        let (ring, first) = Ring::start(pos, Side::Open, Side::Regular);
        PathBuilder { ring, first, current: first, start_pos: pos }
    }

    /// Appends a straight segment to `target`. The outgoing control
    /// of the implicit straight line is the 1/3 point of the chord,
    /// matching the explicit-control convention the convolver expects.
    pub fn lineto(mut self, target: Vec2) -> PathBuilder {
        let cur_pos = self.ring.knot(self.current).pos;
        let third = (target - cur_pos) / 3.0;

        self.ring.knot_mut(self.current).right = Side::Explicit(cur_pos + third);
        let new_id = self.ring.insert_after(self.current, target, Side::Explicit(target - third), Side::Regular);
        self.current = new_id;
        self
    }

    /// Appends a cubic Bezier segment with explicit controls `c1, c2`.
    pub fn curveto(mut self, c1: Vec2, c2: Vec2, target: Vec2) -> PathBuilder {
        self.ring.knot_mut(self.current).right = Side::Explicit(c1);
        let new_id = self.ring.insert_after(self.current, target, Side::Explicit(c2), Side::Regular);
        self.current = new_id;
        self
    }

    /// Closes the path by appending a straight segment back to the
    /// start point, unless the current point already coincides with it.
    pub fn pathclose(self) -> PathBuilder {
        let cur_pos = self.ring.knot(self.current).pos;
        if cur_pos.roughly_equals(self.start_pos) { self } else { self.lineto(self.start_pos) }
    }

    /// Consumes the builder, returning the finished ring and the id
    /// of its first knot.
    pub fn build(self) -> (Ring, NodeId) {
        (self.ring, self.first)
    }
}

/// Builds a validated pen ring from a sequence of corner positions, in
/// CCW order, without running `brush_make` -- the caller does that.
pub fn pen_from_points(points: &[Vec2]) -> (Ring, NodeId) {
    assert!(points.len() >= 3, "a pen needs at least three knots");

    let (mut ring, first) = Ring::start(points[0], Side::Open, Side::Open);
    let mut last = first;
    for &p in &points[1..] {
        last = ring.insert_after(last, p, Side::Open, Side::Open);
    }
    let _ = last;

    (ring, first)
}
