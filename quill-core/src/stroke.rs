//--------------------------------------------------------------------
// stroke.rs
//--------------------------------------------------------------------
// The final output object: an ordered buffer of cubic pieces plus a
// flat RGBA color, and the trivial appender that assembles it from
// one or more convolution passes
//--------------------------------------------------------------------

use crate::convolve::CubicPiece;
use crate::geometry::Vec4;

/// Plain RGBA color storage. No mixing, blending or gamma handling --
/// that belongs to whatever downstream rasterizer the caller brings.
pub type Rgba = Vec4;

#[derive(Clone, Debug)]
pub struct Stroke {
    pub beziers: Vec<CubicPiece>,
    pub color: Rgba,
    pub length: usize,
}

impl Stroke {
    pub fn new(color: Rgba) -> Stroke {
        Stroke { beziers: Vec::new(), color, length: 0 }
    }
}

/// Appends `trace`'s pieces onto `stroke` and updates its length. A
/// typical driver calls `split_at_tees`/`convolve_all` twice per path
/// -- once forward, once on a reversed clone -- so two calls to
/// `show_segments` assemble the full closed outline.
pub fn show_segments(trace: Vec<CubicPiece>, stroke: &mut Stroke) {
    stroke.beziers.extend(trace);
    stroke.length = stroke.beziers.len();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Vec2;

    #[test]
    fn test_show_segments_appends_and_updates_length() {
        let mut stroke = Stroke::new(Rgba::new(0.0, 0.0, 0.0, 1.0));
        let piece = CubicPiece {
            start: Vec2::new(0.0, 0.0),
            c1: Vec2::new(1.0, 0.0),
            c2: Vec2::new(2.0, 0.0),
            end: Vec2::new(3.0, 0.0),
        };

        show_segments(vec![piece], &mut stroke);
        assert_eq!(stroke.length, 1);

        show_segments(vec![piece, piece], &mut stroke);
        assert_eq!(stroke.length, 3);
        assert_eq!(stroke.beziers.len(), 3);
    }
}
