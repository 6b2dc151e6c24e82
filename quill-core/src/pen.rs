//--------------------------------------------------------------------
// pen.rs
//--------------------------------------------------------------------
// Validates a candidate pen ring: strict convexity, CCW orientation,
// total turning in (0, 2*PI], and materializes its explicit controls
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::knot::*;
use crate::ring::*;
use crate::numeric::reduce_angle;

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum BrushError {
    #[error("pen has two adjacent knots at the same position")]
    DuplicatePoint,
    #[error("pen is not strictly convex and counter-clockwise (non-left turn at knot {knot})")]
    NonLeftTurn { knot: NodeId },
    #[error("pen winds more than once around its center (total turn {turn} rad)")]
    TooManyTurns { turn: Coord },
}

/// Validates `ring` as a pen, rooted at `first`, and on success
/// rewrites every knot's side descriptors to the explicit 1/3-2/3
/// chord control points the convolver expects.
pub fn brush_make(ring: &mut Ring, first: NodeId) -> Result<(), BrushError> {
    let ids: Vec<NodeId> = ring.iter_closed(first).collect();

    // Pass 1: reject zero-length edges, then lay down explicit controls.
    for &p in &ids {
        let q = ring.succ(p);
        let (p_pos, q_pos) = (ring.knot(p).pos, ring.knot(q).pos);

        if p_pos.roughly_equals(q_pos) {
            log::debug!("brush_make: rejected, duplicate point at knot {}", p);
            return Err(BrushError::DuplicatePoint);
        }

        let third = (q_pos - p_pos) / 3.0;
        ring.knot_mut(p).right = Side::Explicit(p_pos + third);
        ring.knot_mut(q).left = Side::Explicit(q_pos - third);
    }

    // Pass 2: accumulate turning angle, one left turn at a time.
    let mut prev_dir = (ring.knot(first).pos - ring.knot(ring.pred(first)).pos).angle();
    let mut total_turn = 0.0;

    for &p in &ids {
        let q = ring.succ(p);
        let next_dir = (ring.knot(q).pos - ring.knot(p).pos).angle();
        let theta = reduce_angle(next_dir - prev_dir);

        if theta <= 0.0 {
            log::debug!("brush_make: rejected, non-left turn at knot {} (theta = {})", p, theta);
            return Err(BrushError::NonLeftTurn { knot: p });
        }

        total_turn += theta;
        prev_dir = next_dir;
    }

    if total_turn > TWO_PI {
        log::debug!("brush_make: rejected, total turn {} exceeds 2*pi", total_turn);
        return Err(BrushError::TooManyTurns { turn: total_turn });
    }

    log::debug!("brush_make: accepted pen with {} knots, total turn {}", ids.len(), total_turn);
    Ok(())
}
