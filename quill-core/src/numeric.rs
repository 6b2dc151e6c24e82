//--------------------------------------------------------------------
// numeric.rs
//--------------------------------------------------------------------
// Numerical kernels shared by the subdivider and convolver: angle
// reduction, a numerically stable quadratic solver, its Bernstein
// wrapper, and cubic de Casteljau subdivision
//--------------------------------------------------------------------

use crate::geometry::*;

/// Wraps an angle already known to lie in `[-2*TWO_PI, 2*TWO_PI]` into
/// `(-PI, PI]`.
pub fn reduce_angle(theta: Coord) -> Coord {
    if theta > CoordM::consts::PI { theta - TWO_PI }
    else if theta < -CoordM::consts::PI { theta + TWO_PI }
    else { theta }
}

/// Solves `a*t^2 + 2*b_half*t + c = 0` for real roots, where the
/// caller passes `b_half = -b/2` of the conventional quadratic. Uses
/// the Citardauq form to avoid catastrophic cancellation between
/// nearly equal terms -- do not replace with the naive `(-b +- sqrt(d))
/// / (2a)` form, it visibly loses precision on several inputs this
/// crate cares about.
pub fn solve_quadratic(a: Coord, b_half: Coord, c: Coord) -> Vec<Coord> {
    let mut roots: Vec<Coord> = Vec::new();

    if a == 0.0 {
        if b_half != 0.0 { roots.push(c / (2.0 * b_half)); }
        return roots;
    }

    if c == 0.0 {
        roots.push(0.0);
        if b_half != 0.0 { roots.push(2.0 * b_half / a); }
        return roots;
    }

    let d = b_half * b_half - a * c;
    if d < 0.0 { return roots; }
    if d == 0.0 {
        roots.push(b_half / a);
        return roots;
    }

    let sqrt_d = d.sqrt();
    if b_half < 0.0 {
        let q = b_half - sqrt_d;
        roots.push(c / q);
        roots.push(q / a);
    } else {
        let q = b_half + sqrt_d;
        roots.push(c / q);
        roots.push(q / a);
    }

    roots
}

/// Solves the degree-2 Bernstein form `u*(1-t)^2 + 2*v*t*(1-t) + w*t^2
/// = 0` by reduction to `solve_quadratic`.
pub fn solve_bezier(u: Coord, v: Coord, w: Coord) -> Vec<Coord> {
    solve_quadratic(u - 2.0 * v + w, u - v, u)
}

/// Standard cubic de Casteljau subdivision at parameter `t`. Returns
/// the left sub-curve's control points followed by the right
/// sub-curve's control points; both share the midpoint `g`.
pub fn decasteljau_split(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: Coord)
    -> ((Vec2, Vec2, Vec2, Vec2), (Vec2, Vec2, Vec2, Vec2))
{
    let lerp = |a: Vec2, b: Vec2| a + t * (b - a);

    let e0 = lerp(p0, p1);
    let e1 = lerp(p1, p2);
    let e2 = lerp(p2, p3);
    let f0 = lerp(e0, e1);
    let f1 = lerp(e1, e2);
    let g = lerp(f0, f1);

    ((p0, e0, f0, g), (g, f1, e2, p3))
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reduce_angle_identity_inside_range() {
        assert_relative_eq!(reduce_angle(1.0), 1.0);
    }

    #[test]
    fn test_reduce_angle_wraps_above_pi() {
        let theta = CoordM::consts::PI + 0.5;
        assert_relative_eq!(reduce_angle(theta), 0.5 - CoordM::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_quadratic_two_roots() {
        // t^2 - 3t + 2 = 0 -> roots 1, 2. a=1, b_half=-1.5, c=2
        let mut roots = solve_quadratic(1.0, -1.5, 2.0);
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_quadratic_no_real_roots() {
        // t^2 + 1 = 0, a=1, b_half=0, c=1
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_solve_quadratic_linear_fallback() {
        // 2t - 4 = 0 -> t = 2, conventional b = -4 so b_half = 2
        let roots = solve_quadratic(0.0, 2.0, -4.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_bezier_matches_endpoints() {
        // u=1, v=1, w=-1 : P(t) = 1 - 4t + 2t^2... just check a root exists between 0 and 1
        let roots = solve_bezier(1.0, 0.5, -1.0);
        assert!(!roots.is_empty());
    }

    #[test]
    fn test_decasteljau_split_reproduces_curve_at_t() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(0.0, 10.0);
        let p2 = Vec2::new(10.0, -10.0);
        let p3 = Vec2::new(10.0, 0.0);

        let (left, right) = decasteljau_split(p0, p1, p2, p3, 0.5);
        assert_relative_eq!(left.3.x, right.0.x, epsilon = 1e-12);
        assert_relative_eq!(left.3.y, right.0.y, epsilon = 1e-12);
        assert_relative_eq!(left.0.x, p0.x);
        assert_relative_eq!(right.3.x, p3.x);
    }
}
