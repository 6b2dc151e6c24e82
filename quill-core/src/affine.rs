//--------------------------------------------------------------------
// affine.rs
//--------------------------------------------------------------------
// A minimal 2x3 affine transform, used to position/scale/rotate a pen
// before it is handed to brush_make
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::knot::*;
use crate::ring::*;

/// `[a b; c d]` linear part plus `(tx, ty)` translation, applied as
/// `p' = (a*x + b*y + tx, c*x + d*y + ty)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine {
    pub a: Coord, pub b: Coord, pub c: Coord, pub d: Coord,
    pub tx: Coord, pub ty: Coord,
}

impl Affine {
    pub fn identity() -> Affine {
        Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 }
    }

    pub fn translation(t: Vec2) -> Affine {
        Affine { tx: t.x, ty: t.y, ..Affine::identity() }
    }

    pub fn scale(s: Coord) -> Affine {
        Affine { a: s, d: s, ..Affine::identity() }
    }

    pub fn rotation(angle: Coord) -> Affine {
        let (sin, cos) = angle.sin_cos();
        Affine { a: cos, b: -sin, c: sin, d: cos, tx: 0.0, ty: 0.0 }
    }

    /// Applies only the linear part (no translation) -- used for
    /// control-point offsets, which are relative vectors, not points.
    pub fn apply_linear(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    pub fn apply_point(&self, v: Vec2) -> Vec2 {
        self.apply_linear(v) + Vec2::new(self.tx, self.ty)
    }

    pub fn then(&self, next: Affine) -> Affine {
        Affine {
            a: next.a * self.a + next.b * self.c,
            b: next.a * self.b + next.b * self.d,
            c: next.c * self.a + next.d * self.c,
            d: next.c * self.b + next.d * self.d,
            tx: next.a * self.tx + next.b * self.ty + next.tx,
            ty: next.c * self.tx + next.d * self.ty + next.ty,
        }
    }
}

/// Applies `xf` to every knot of `ring` in place: positions via the
/// full affine map, any already-materialized explicit side controls
/// via the linear part only relative to the knot's own position.
pub fn apply_affine(ring: &mut Ring, first: NodeId, xf: Affine) {
    let ids: Vec<NodeId> = ring.iter_closed(first).collect();

    for id in ids {
        let old_pos = ring.knot(id).pos;
        let new_pos = xf.apply_point(old_pos);

        let left = match ring.knot(id).left {
            Side::Explicit(c) => Side::Explicit(new_pos + xf.apply_linear(c - old_pos)),
            other => other,
        };
        let right = match ring.knot(id).right {
            Side::Explicit(c) => Side::Explicit(new_pos + xf.apply_linear(c - old_pos)),
            other => other,
        };

        let knot = ring.knot_mut(id);
        knot.pos = new_pos;
        knot.left = left;
        knot.right = right;
    }
}
