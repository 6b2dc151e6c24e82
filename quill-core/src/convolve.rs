//------------------------------------------------------------------------------
// convolve.rs
//------------------------------------------------------------------------------
// Sweeps a validated pen along a path, emitting the swept outline as
// an ordered buffer of cubic Bezier pieces
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::knot::*;
use crate::ring::*;

const CLOCKWISE_TOLERANCE: Coord = 1e-12;

/// `true` when `b` does not lie strictly counter-clockwise from `a`.
/// Near-collinear pairs (`|cross| < CLOCKWISE_TOLERANCE`) are always
/// treated as clockwise; this bias is load-bearing, removing it drops
/// corner segments on axis-aligned pens.
fn clockwise(a: Vec2, b: Vec2) -> bool {
    let c = a.cross(b);
    c >= 0.0 || c.abs() < CLOCKWISE_TOLERANCE
}

/// `true` when `v2` lies in the convex CCW arc swept from `v1` to `v3`.
fn within_turn(v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    if !clockwise(v1, v2) {
        clockwise(v2, v3) && clockwise(v3, v1)
    } else {
        clockwise(v1, v3) && clockwise(v3, v2)
    }
}

/// A single emitted cubic Bezier piece of the swept outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicPiece {
    pub start: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

fn convolve(
    trace: &mut Vec<CubicPiece>,
    path: &Ring, p: NodeId, q: NodeId,
    v1: Vec2, v2: Vec2, v3: Vec2,
    pen: &Ring, r: NodeId,
) {
    let s = pen.succ(r);
    let v4 = pen.knot(r).pos - pen.knot(pen.pred(r)).pos;
    let v5 = pen.knot(s).pos - pen.knot(r).pos;

    let p_pos = path.knot(p).pos;
    let q_pos = path.knot(q).pos;
    let p_right = path.knot(p).right.explicit().unwrap();
    let q_left = path.knot(q).left.explicit().unwrap();
    let r_pos = pen.knot(r).pos;
    let s_pos = pen.knot(s).pos;
    let r_right = pen.knot(r).right.explicit().unwrap();
    let s_left = pen.knot(s).left.explicit().unwrap();

    if within_turn(v1, v2, v5) {
        trace.push(CubicPiece {
            start: p_pos + r_pos,
            c1: p_right + r_pos,
            c2: q_left + r_pos,
            end: q_pos + r_pos,
        });
    }

    if within_turn(v4, v5, v3) {
        trace.push(CubicPiece {
            start: r_pos + p_pos,
            c1: r_right + p_pos,
            c2: s_left + p_pos,
            end: s_pos + p_pos,
        });
    }
}

/// Sweeps `pen` along every segment of `path`, returning the emitted
/// pieces in strict emission order: path segments in ring succession,
/// and for each segment the pen traversed in ring succession,
/// forward-emit before reverse-emit per pen knot.
pub fn convolve_all(path: &Ring, path_first: NodeId, pen: &Ring, pen_first: NodeId) -> Vec<CubicPiece> {
    let mut trace = Vec::new();
    let mut p = path_first;

    loop {
        if path.knot(p).right.is_regular() { break; }
        let q = path.succ(p);

        let p_pos = path.knot(p).pos;
        let q_pos = path.knot(q).pos;
        let p_right = path.knot(p).right.explicit().unwrap();

        let v_out = p_right - p_pos;
        let v_in = match path.knot(p).left.explicit() {
            Some(p_left) => p_pos - p_left,
            None => -v_out,
        };
        let v_next = q_pos - p_pos;

        let pieces_before = trace.len();
        for r in pen.iter_closed(pen_first) {
            convolve(&mut trace, path, p, q, v_in, v_out, v_next, pen, r);
        }

        log::trace!(
            "convolve_all: segment {} -> {} emitted {} piece(s)",
            p, q, trace.len() - pieces_before
        );

        p = q;
    }

    trace
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pen::brush_make;

    fn square_pen() -> (Ring, NodeId) {
        let (mut pen, first) = Ring::start(Vec2::new(0.5, 0.5), Side::Open, Side::Open);
        let a = pen.insert_after(first, Vec2::new(-0.5, 0.5), Side::Open, Side::Open);
        let b = pen.insert_after(a, Vec2::new(-0.5, -0.5), Side::Open, Side::Open);
        pen.insert_after(b, Vec2::new(0.5, -0.5), Side::Open, Side::Open);
        brush_make(&mut pen, first).unwrap();
        (pen, first)
    }

    fn straight_line_path() -> (Ring, NodeId) {
        let (mut path, first) = Ring::start(Vec2::new(0.0, 0.0), Side::Open, Side::Explicit(Vec2::new(3.33, 0.0)));
        path.insert_after(first, Vec2::new(10.0, 0.0), Side::Explicit(Vec2::new(6.67, 0.0)), Side::Regular);
        (path, first)
    }

    #[test]
    fn test_square_pen_on_straight_path_emits_pieces_within_swept_bounds() {
        let (pen, pen_first) = square_pen();
        let (path, first) = straight_line_path();

        let trace = convolve_all(&path, first, &pen, pen_first);
        assert!(!trace.is_empty());

        // Every emitted control point is a path point offset by a pen
        // point, so it must land within the Minkowski-sum bounding box
        // of the path's x in [0, 10] and the pen's unit square.
        for piece in &trace {
            for v in [piece.start, piece.c1, piece.c2, piece.end] {
                assert!(v.x >= -0.6 && v.x <= 10.6);
                assert!(v.y >= -0.6 && v.y <= 0.6);
            }
        }
    }

    #[test]
    fn test_emission_is_deterministic() {
        let (pen, pen_first) = square_pen();
        let (path, first) = straight_line_path();

        let trace_a = convolve_all(&path, first, &pen, pen_first);
        let trace_b = convolve_all(&path, first, &pen, pen_first);
        assert_eq!(trace_a, trace_b);
    }

    #[test]
    fn test_clockwise_treats_near_collinear_as_clockwise() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(1.0, 1e-14);
        assert!(clockwise(a, b));
    }

    #[test]
    fn test_within_turn_accepts_midpoint_of_ccw_arc() {
        let v1 = Vec2::new(1.0, 0.0);
        let v2 = Vec2::new(0.0, 1.0);
        let v3 = Vec2::new(-1.0, 0.0);
        assert!(within_turn(v1, v2, v3));
    }
}
