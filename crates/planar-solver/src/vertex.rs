use crate::geometry::{self, Point};
use crate::problem::{Constraint, Direction, LinearProgram, ProblemError, Relation};
use crate::solution::Solution;

/// Vertex-enumeration solver for two-variable linear programs.
///
/// The feasible region of a two-variable LP is a convex polygon, so the
/// optimum lies at a vertex. With at most a handful of constraints the
/// quadratic pair enumeration is cheap and exact.
pub struct Solver {
    /// Tolerance for floating point comparisons
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self { tolerance: 1e-10 }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Solve the program. Infeasibility is a `Solution` with
    /// `feasible == false`; `Err` is reserved for malformed input.
    pub fn solve(&self, lp: &LinearProgram) -> Result<Solution, ProblemError> {
        lp.validate()?;

        let vertices = self.feasible_vertices(lp);
        if vertices.is_empty() {
            return Ok(Solution::infeasible());
        }

        let mut best = vertices[0];
        for &v in &vertices[1..] {
            if self.improves(lp, v, best) {
                best = v;
            }
        }

        if lp.discrete {
            return Ok(self.integer_repair(lp, &vertices));
        }

        let value = lp.objective.value_at(best.x, best.y);
        Ok(Solution::optimal(best, value, vertices))
    }

    /// Enumerate the feasible vertices in a stable order: origin seed first,
    /// then pairwise boundary intersections. The implicit non-negativity
    /// bounds participate as the lines `x = 0` and `y = 0` so that corners
    /// on the axes are not missed.
    fn feasible_vertices(&self, lp: &LinearProgram) -> Vec<Point> {
        let mut boundaries = lp.constraints.clone();
        boundaries.push(Constraint::new("x >= 0", 1.0, 0.0, Relation::Ge, 0.0));
        boundaries.push(Constraint::new("y >= 0", 0.0, 1.0, Relation::Ge, 0.0));

        let mut candidates = vec![Point::ORIGIN];
        for i in 0..boundaries.len() {
            for j in (i + 1)..boundaries.len() {
                if let Some(p) = geometry::intersection(&boundaries[i], &boundaries[j], self.tolerance)
                {
                    candidates.push(p);
                }
            }
        }

        let mut vertices: Vec<Point> = Vec::new();
        for p in candidates {
            if !geometry::is_feasible(p, &lp.constraints, self.tolerance) {
                continue;
            }
            let duplicate = vertices
                .iter()
                .any(|v| (v.x - p.x).abs() <= self.tolerance && (v.y - p.y).abs() <= self.tolerance);
            if !duplicate {
                vertices.push(p);
            }
        }
        vertices
    }

    /// Strict improvement test; ties keep the incumbent, which preserves
    /// first-encountered order.
    fn improves(&self, lp: &LinearProgram, candidate: Point, incumbent: Point) -> bool {
        let c = lp.objective.value_at(candidate.x, candidate.y);
        let i = lp.objective.value_at(incumbent.x, incumbent.y);
        match lp.objective.direction {
            Direction::Maximize => c > i,
            Direction::Minimize => c < i,
        }
    }

    /// Find the best feasible integer point by enumerating the integer grid
    /// inside the bounding box of the feasible vertex set. The region is the
    /// convex hull of its vertices, so for bounded regions no feasible
    /// integer point lies outside the box.
    fn integer_repair(&self, lp: &LinearProgram, vertices: &[Point]) -> Solution {
        let mut x_hi: i64 = 0;
        let mut y_hi: i64 = 0;
        for v in vertices {
            x_hi = x_hi.max((v.x + self.tolerance).floor() as i64);
            y_hi = y_hi.max((v.y + self.tolerance).floor() as i64);
        }

        let mut best: Option<Point> = None;
        for xi in 0..=x_hi {
            for yi in 0..=y_hi {
                let p = Point::new(xi as f64, yi as f64);
                if !geometry::is_feasible(p, &lp.constraints, self.tolerance) {
                    continue;
                }
                match best {
                    Some(b) if !self.improves(lp, p, b) => {}
                    _ => best = Some(p),
                }
            }
        }

        match best {
            Some(p) => {
                let value = lp.objective.value_at(p.x, p.y);
                Solution::optimal(p, value, vertices.to_vec())
            }
            // Continuous region is non-empty but holds no integer point
            None => Solution::infeasible(),
        }
    }
}
