use thiserror::Error;

/// Errors produced by [`LinearProgram::validate`].
///
/// Infeasibility is not an error: an infeasible program solves to a
/// [`crate::Solution`] with `feasible == false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Non-finite coefficient in {place}")]
    NonFiniteCoefficient { place: String },
    #[error("Degenerate objective: both coefficients are zero")]
    DegenerateObjective,
}

/// Comparison relation of a constraint.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl Relation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
        }
    }
}

/// One linear boundary of the feasible region: `a*x + b*y <relation> rhs`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Label for explanations and diagnostics
    pub label: String,
    pub a: f64,
    pub b: f64,
    pub rhs: f64,
    pub relation: Relation,
}

impl Constraint {
    pub fn new(label: impl Into<String>, a: f64, b: f64, relation: Relation, rhs: f64) -> Self {
        Self {
            label: label.into(),
            a,
            b,
            rhs,
            relation,
        }
    }

    /// Value of the left-hand side at a point.
    pub fn lhs(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }
}

/// Optimization direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

/// Linear objective `a*x + b*y`, maximized or minimized.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub a: f64,
    pub b: f64,
    pub direction: Direction,
}

impl Objective {
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }
}

/// Display names for the two decision variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Variables {
    pub x: String,
    pub y: String,
}

/// A two-variable linear program.
///
/// Non-negativity (`x >= 0`, `y >= 0`) is implicit and always enforced,
/// whether or not the constraint list repeats it. All modeled problems are
/// production/quantity problems where negative quantities are meaningless.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
    pub variables: Variables,
    /// Force an integral solution
    pub discrete: bool,
}

impl LinearProgram {
    pub fn new(x_name: impl Into<String>, y_name: impl Into<String>) -> Self {
        Self {
            objective: Objective {
                a: 0.0,
                b: 0.0,
                direction: Direction::Maximize,
            },
            constraints: Vec::new(),
            variables: Variables {
                x: x_name.into(),
                y: y_name.into(),
            },
            discrete: false,
        }
    }

    pub fn set_objective(&mut self, a: f64, b: f64, direction: Direction) {
        self.objective = Objective { a, b, direction };
    }

    pub fn add_constraint(
        &mut self,
        label: impl Into<String>,
        a: f64,
        b: f64,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints
            .push(Constraint::new(label, a, b, relation, rhs));
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Reject programs the solver cannot give a meaningful answer for:
    /// non-finite coefficients and objectives with no direction of improvement.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if !self.objective.a.is_finite() || !self.objective.b.is_finite() {
            return Err(ProblemError::NonFiniteCoefficient {
                place: "objective".to_string(),
            });
        }
        if self.objective.a == 0.0 && self.objective.b == 0.0 {
            return Err(ProblemError::DegenerateObjective);
        }
        for c in &self.constraints {
            if !c.a.is_finite() || !c.b.is_finite() || !c.rhs.is_finite() {
                return Err(ProblemError::NonFiniteCoefficient {
                    place: format!("constraint '{}'", c.label),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_nan() {
        let mut lp = LinearProgram::new("x", "y");
        lp.set_objective(1.0, 1.0, Direction::Maximize);
        lp.add_constraint("bad", f64::NAN, 1.0, Relation::Le, 10.0);

        assert_eq!(
            lp.validate(),
            Err(ProblemError::NonFiniteCoefficient {
                place: "constraint 'bad'".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_objective() {
        let lp = LinearProgram::new("x", "y");
        assert_eq!(lp.validate(), Err(ProblemError::DegenerateObjective));
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let mut lp = LinearProgram::new("x", "y");
        lp.set_objective(3.0, 2.0, Direction::Maximize);
        lp.add_constraint("cap", 1.0, 1.0, Relation::Le, 4.0);
        assert!(lp.validate().is_ok());
    }
}
