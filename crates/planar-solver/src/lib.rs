mod geometry;
mod problem;
mod solution;
mod vertex;

pub use geometry::{intersection, is_feasible, satisfies, Point};
pub use problem::{
    Constraint, Direction, LinearProgram, Objective, ProblemError, Relation, Variables,
};
pub use solution::Solution;
pub use vertex::Solver;
