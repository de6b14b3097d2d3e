use crate::problem::{Constraint, Relation};

/// A point in the plane, used both as a candidate vertex and as the
/// solution location.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Intersection of two constraint boundaries, treating both as equalities
/// and solving the 2x2 system by Cramer's rule.
///
/// Returns `None` when the lines are parallel or identical (|det| below
/// `tolerance`); callers simply omit the pair from the candidate vertex set.
pub fn intersection(c1: &Constraint, c2: &Constraint, tolerance: f64) -> Option<Point> {
    let det = c1.a * c2.b - c1.b * c2.a;
    if det.abs() < tolerance {
        return None;
    }
    let x = (c1.rhs * c2.b - c1.b * c2.rhs) / det;
    let y = (c1.a * c2.rhs - c1.rhs * c2.a) / det;
    Some(Point::new(x, y))
}

/// Whether a point satisfies a single constraint's relation, with tolerance
/// to absorb floating-point error from the intersection computation.
pub fn satisfies(point: Point, c: &Constraint, tolerance: f64) -> bool {
    let lhs = c.lhs(point.x, point.y);
    match c.relation {
        Relation::Le => lhs <= c.rhs + tolerance,
        Relation::Ge => lhs >= c.rhs - tolerance,
        Relation::Eq => (lhs - c.rhs).abs() <= tolerance,
    }
}

/// Whether a point lies in the feasible region: every constraint holds and
/// both coordinates are non-negative. Non-negativity is unconditional,
/// independent of whether the constraint list spells it out.
pub fn is_feasible(point: Point, constraints: &[Constraint], tolerance: f64) -> bool {
    if point.x < -tolerance || point.y < -tolerance {
        return false;
    }
    constraints.iter().all(|c| satisfies(point, c, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn le(a: f64, b: f64, rhs: f64) -> Constraint {
        Constraint::new("c", a, b, Relation::Le, rhs)
    }

    #[test]
    fn test_intersection_basic() {
        // x = 3 and y = 2 cross at (3, 2)
        let p = intersection(&le(1.0, 0.0, 3.0), &le(0.0, 1.0, 2.0), TOL).unwrap();
        assert!((p.x - 3.0).abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_intersection_parallel_is_none() {
        // x + y <= 4 and x + y <= 7 never cross
        assert!(intersection(&le(1.0, 1.0, 4.0), &le(1.0, 1.0, 7.0), TOL).is_none());
    }

    #[test]
    fn test_intersection_identical_is_none() {
        let c = le(2.0, 3.0, 6.0);
        assert!(intersection(&c, &c, TOL).is_none());
    }

    #[test]
    fn test_feasibility_respects_relation() {
        let cs = vec![
            le(1.0, 0.0, 5.0),
            Constraint::new("floor", 0.0, 1.0, Relation::Ge, 1.0),
        ];
        assert!(is_feasible(Point::new(5.0, 1.0), &cs, TOL));
        assert!(!is_feasible(Point::new(6.0, 1.0), &cs, TOL));
        assert!(!is_feasible(Point::new(5.0, 0.5), &cs, TOL));
    }

    #[test]
    fn test_feasibility_rejects_negative_coordinates() {
        // No explicit non-negativity constraints supplied
        let cs = vec![le(1.0, 1.0, 10.0)];
        assert!(!is_feasible(Point::new(-1.0, 2.0), &cs, TOL));
        assert!(!is_feasible(Point::new(2.0, -1.0), &cs, TOL));
    }

    #[test]
    fn test_feasibility_tolerates_rounding_noise() {
        let cs = vec![le(1.0, 0.0, 3.0)];
        assert!(is_feasible(Point::new(3.0 + 1e-12, 0.0), &cs, TOL));
        assert!(is_feasible(Point::new(-1e-12, 0.0), &cs, TOL));
    }

    #[test]
    fn test_equality_constraint() {
        let c = Constraint::new("line", 1.0, 1.0, Relation::Eq, 4.0);
        assert!(satisfies(Point::new(1.0, 3.0), &c, TOL));
        assert!(!satisfies(Point::new(1.0, 3.5), &c, TOL));
    }
}
