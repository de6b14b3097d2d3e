use crate::geometry::Point;

/// The result of solving a two-variable linear program.
///
/// Infeasibility is reported through `feasible == false`, never as an error:
/// the caller decides how to present it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Optimal point (integral when the program is discrete)
    pub point: Point,
    /// Objective value attained at `point`
    pub objective_value: f64,
    /// Whether the feasible region contains any point at all
    pub feasible: bool,
    /// Every feasible vertex the optimizer considered, in scan order
    pub vertices: Vec<Point>,
}

impl Solution {
    /// The fixed infeasibility value: origin, zero objective, no vertices.
    pub fn infeasible() -> Self {
        Self {
            point: Point::ORIGIN,
            objective_value: 0.0,
            feasible: false,
            vertices: Vec::new(),
        }
    }

    pub fn optimal(point: Point, objective_value: f64, vertices: Vec<Point>) -> Self {
        Self {
            point,
            objective_value,
            feasible: true,
            vertices,
        }
    }
}
