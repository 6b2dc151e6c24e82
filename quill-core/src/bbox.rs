//--------------------------------------------------------------------
// bbox.rs
//--------------------------------------------------------------------
// A bounding-box-only overlap filter. This is NOT a geometric
// intersection test -- it answers "could these two strokes possibly
// overlap", nothing stronger, and is kept outside the convolution
// core on purpose
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::stroke::Stroke;

/// The axis-aligned box enclosing every control point of `stroke`'s
/// pieces. A cubic's hull is not its exact extent, so this is already
/// a conservative (slightly oversized) bound, which is why this
/// module is named after the filter, not a precise bbox computation.
pub fn stroke_bounds(stroke: &Stroke) -> Option<Rect> {
    let points = stroke.beziers.iter().flat_map(|p| vec![p.start, p.c1, p.c2, p.end].into_iter());
    Rect::enclosing_rect(points)
}

/// Conservative overlap check: `false` is a hard guarantee the two
/// strokes do not overlap; `true` means only that their bounding
/// boxes overlap, not that the inked regions actually do.
pub fn strokes_may_overlap(a: &Stroke, b: &Stroke) -> bool {
    match (stroke_bounds(a), stroke_bounds(b)) {
        (Some(ra), Some(rb)) => ra.intersects(rb),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::convolve::CubicPiece;

    fn test_color() -> crate::stroke::Rgba { Vec4::new(0.0, 0.0, 0.0, 1.0) }

    fn stroke_with_bbox(x: Coord, y: Coord, w: Coord, h: Coord) -> Stroke {
        let mut s = Stroke::new(test_color());
        s.beziers.push(CubicPiece {
            start: Vec2::new(x, y),
            c1: Vec2::new(x, y),
            c2: Vec2::new(x + w, y + h),
            end: Vec2::new(x + w, y + h),
        });
        s
    }

    #[test]
    fn test_disjoint_bounding_boxes_do_not_overlap() {
        let a = stroke_with_bbox(0.0, 0.0, 1.0, 1.0);
        let b = stroke_with_bbox(10.0, 10.0, 1.0, 1.0);
        assert!(!strokes_may_overlap(&a, &b));
    }

    #[test]
    fn test_overlapping_bounding_boxes_may_overlap() {
        let a = stroke_with_bbox(0.0, 0.0, 2.0, 2.0);
        let b = stroke_with_bbox(1.0, 1.0, 2.0, 2.0);
        assert!(strokes_may_overlap(&a, &b));
    }

    #[test]
    fn test_empty_stroke_never_overlaps() {
        let a = Stroke::new(test_color());
        let b = stroke_with_bbox(0.0, 0.0, 1.0, 1.0);
        assert!(!strokes_may_overlap(&a, &b));
    }
}
