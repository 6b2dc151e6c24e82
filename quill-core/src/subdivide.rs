//------------------------------------------------------------------------------
// subdivide.rs
//------------------------------------------------------------------------------
// Finds tee parameters (inflections and pen-edge slope matches) on
// each segment of a path and splits the path there via de Casteljau
// subdivision
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::knot::*;
use crate::ring::*;
use crate::numeric::*;

fn velocity_controls(ring: &Ring, p: NodeId, q: NodeId) -> (Vec2, Vec2, Vec2) {
    let p_pos = ring.knot(p).pos;
    let q_pos = ring.knot(q).pos;
    let p_right = ring.knot(p).right.explicit().expect("segment start must have an explicit right control");
    let q_left = ring.knot(q).left.explicit().expect("segment end must have an explicit left control");

    (p_right - p_pos, q_left - p_right, q_pos - q_left)
}

fn inflection_tees(v0: Vec2, v1: Vec2, v2: Vec2) -> Vec<Coord> {
    let a = v1.x * v0.y;
    let b = v2.x * v0.y;
    let c = v0.x * v1.y;
    let d = v2.x * v1.y;

    solve_quadratic(18.0 * (-3.0 * a + 2.0 * b + 3.0 * c - d), 9.0 * (-3.0 * a + b + 3.0 * c), 18.0 * (c - a))
}

fn pen_slope_tees(pen: &Ring, pen_first: NodeId, v0: Vec2, v1: Vec2, v2: Vec2) -> Vec<Coord> {
    let mut tees = Vec::new();

    for r in pen.iter_closed(pen_first) {
        let s = pen.succ(r);
        let d = pen.knot(s).pos - pen.knot(r).pos;

        let u = d.cross(v0);
        let v = d.cross(v1);
        let w = d.cross(v2);

        tees.extend(solve_bezier(u, v, w));
    }

    tees
}

/// Mutates `path` in place, inserting a new knot at every tee
/// parameter of every segment. Segments are visited `p -> succ(p)`
/// while `p.right` is `Explicit`, stopping at the knot whose `right`
/// is `Regular`.
pub fn split_at_tees(path: &mut Ring, path_first: NodeId, pen: &Ring, pen_first: NodeId) {
    let mut p = path_first;

    loop {
        let is_last = path.knot(p).right.is_regular();
        if is_last { break; }

        let q = path.succ(p);
        let (v0, v1, v2) = velocity_controls(path, p, q);

        let mut tees: Vec<Coord> = inflection_tees(v0, v1, v2);
        tees.extend(pen_slope_tees(pen, pen_first, v0, v1, v2));

        let mut tees: Vec<Coord> = tees.into_iter().filter(|&t| t > 0.0 && t < 1.0).collect();
        tees.sort_by(|a, b| a.partial_cmp(b).unwrap());
        tees.dedup_by(|a, b| *a == *b);

        log::trace!("split_at_tees: segment {} -> {} has {} tee(s)", p, q, tees.len());

        let mut cur = p;
        let mut prev_global = 0.0;

        for t in tees {
            let local_t = (t - prev_global) / (1.0 - prev_global);
            prev_global = t;

            if local_t <= 0.0 || local_t >= 1.0 { continue; }

            let cur_pos = path.knot(cur).pos;
            let cur_right = path.knot(cur).right.explicit().unwrap();
            let q_left = path.knot(q).left.explicit().unwrap();
            let q_pos = path.knot(q).pos;

            let (left, right) = decasteljau_split(cur_pos, cur_right, q_left, q_pos, local_t);

            path.knot_mut(cur).right = Side::Explicit(left.1);
            path.knot_mut(q).left = Side::Explicit(right.2);

            let new_id = path.insert_after(cur, left.3, Side::Explicit(left.2), Side::Explicit(right.1));
            cur = new_id;
        }

        p = q;
    }
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

    fn single_cubic_path(c1: Vec2, c2: Vec2, end: Vec2) -> (Ring, NodeId) {
        let (mut path, first) = Ring::start(Vec2::new(0.0, 0.0), Side::Open, Side::Explicit(c1));
        path.insert_after(first, end, Side::Explicit(c2), Side::Regular);
        (path, first)
    }

    #[test]
    fn test_no_tees_on_straight_segment() {
        let (pen, pen_first) = square_pen();
        let (mut path, first) = single_cubic_path(Vec2::new(3.33, 0.0), Vec2::new(6.67, 0.0), Vec2::new(10.0, 0.0));

        split_at_tees(&mut path, first, &pen, pen_first);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_single_inflection_adds_one_knot() {
        let (pen, pen_first) = square_pen();
        let (mut path, first) = single_cubic_path(Vec2::new(0.0, 10.0), Vec2::new(10.0, -10.0), Vec2::new(10.0, 0.0));

        split_at_tees(&mut path, first, &pen, pen_first);
        assert_eq!(path.len(), 3);

        let mid = path.succ(first);
        assert!((path.knot(mid).pos.x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_resplitting_adds_no_further_knots() {
        let (pen, pen_first) = square_pen();
        let (mut path, first) = single_cubic_path(Vec2::new(0.0, 10.0), Vec2::new(10.0, -10.0), Vec2::new(10.0, 0.0));

        split_at_tees(&mut path, first, &pen, pen_first);
        let len_after_first = path.len();
        split_at_tees(&mut path, first, &pen, pen_first);
        assert_eq!(path.len(), len_after_first);
    }
}
