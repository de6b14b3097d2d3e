use planar_solver::{Direction, LinearProgram, Relation};

/// Closed set of word problems the recognizer knows how to model.
///
/// Recognition is template matching, not language understanding: a text
/// either matches one of these scenarios or the caller falls back to
/// whatever general-purpose path it has.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// English: automobile manufacturer producing Model A and Model B
    AutoManufacturer,
    /// German: Werkzeug C/D production limited by Arbeitsstunden and
    /// Materialkosten
    ToolManufacturer,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::AutoManufacturer => "auto-manufacturer",
            Scenario::ToolManufacturer => "tool-manufacturer",
        }
    }

    pub fn language(&self) -> &'static str {
        match self {
            Scenario::AutoManufacturer => "en",
            Scenario::ToolManufacturer => "de",
        }
    }
}

/// A named problem template: a match predicate over the raw text plus a
/// builder for the canonical program of that scenario.
pub struct ProblemTemplate {
    pub scenario: Scenario,
    matches: fn(&str) -> bool,
    build: fn() -> LinearProgram,
}

impl ProblemTemplate {
    pub fn matches(&self, text: &str) -> bool {
        (self.matches)(text)
    }

    pub fn build(&self) -> LinearProgram {
        (self.build)()
    }
}

/// The template registry. Adding a scenario means adding an entry here and
/// a formatter arm; nothing branches on free-form string content elsewhere.
pub static TEMPLATES: [ProblemTemplate; 2] = [
    ProblemTemplate {
        scenario: Scenario::AutoManufacturer,
        matches: matches_auto,
        build: build_auto,
    },
    ProblemTemplate {
        scenario: Scenario::ToolManufacturer,
        matches: matches_tool,
        build: build_tool,
    },
];

/// A recognized problem: the canonical program tagged with its scenario.
/// The tag drives formatting, so an unrecognized text can never reach a
/// formatter fallback.
#[derive(Debug, Clone)]
pub struct RecognizedProblem {
    pub scenario: Scenario,
    pub program: LinearProgram,
}

/// Match `text` against the registry; `None` means the caller should fall
/// back to its external path.
pub fn recognize(text: &str) -> Option<RecognizedProblem> {
    TEMPLATES.iter().find(|t| t.matches(text)).map(|t| RecognizedProblem {
        scenario: t.scenario,
        program: t.build(),
    })
}

fn matches_auto(text: &str) -> bool {
    let t = text.to_lowercase();
    t.contains("automobile") && t.contains("model a") && t.contains("model b")
}

fn build_auto() -> LinearProgram {
    let mut lp = LinearProgram::new("Model A", "Model B");
    lp.set_objective(2400.0, 3600.0, Direction::Maximize);
    lp.add_constraint("Model A capacity", 1.0, 0.0, Relation::Le, 600.0);
    lp.add_constraint("Model B capacity", 0.0, 1.0, Relation::Le, 300.0);
    lp.add_constraint("Total production", 1.0, 1.0, Relation::Le, 750.0);
    lp
}

fn matches_tool(text: &str) -> bool {
    let t = text.to_lowercase();
    t.contains("werkzeug") && (t.contains("arbeitsstunden") || t.contains("materialkosten"))
}

fn build_tool() -> LinearProgram {
    let mut lp = LinearProgram::new("Werkzeug C", "Werkzeug D");
    lp.set_objective(8.0, 5.0, Direction::Maximize);
    lp.add_constraint("Arbeitsstunden", 5.0, 6.0, Relation::Le, 4000.0);
    lp.add_constraint("Materialkosten", 5.0, 0.6, Relation::Le, 1500.0);
    lp.add_constraint("Absatzgrenze Werkzeug D", 0.0, 1.0, Relation::Le, 550.0);
    lp.add_constraint("Gesamtkapazität", 1.0, 1.0, Relation::Le, 800.0);
    lp.discrete = true;
    lp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_auto_problem() {
        let text = "An automobile manufacturer produces Model A and Model B. \
                    Model A yields a profit of 2400 per unit and Model B 3600 per unit. \
                    How many of each should be produced to maximize profit?";
        let recognized = recognize(text).expect("should match auto template");
        assert_eq!(recognized.scenario, Scenario::AutoManufacturer);
        assert_eq!(recognized.program.constraints.len(), 3);
        assert!(!recognized.program.discrete);
    }

    #[test]
    fn test_recognizes_tool_problem() {
        let text = "Ein Betrieb fertigt Werkzeug C und Werkzeug D. Es stehen 4000 \
                    Arbeitsstunden zur Verfügung, die Materialkosten sind auf 1500 begrenzt.";
        let recognized = recognize(text).expect("should match tool template");
        assert_eq!(recognized.scenario, Scenario::ToolManufacturer);
        assert_eq!(recognized.program.constraints.len(), 4);
        assert!(recognized.program.discrete);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = "AUTOMOBILE plant: MODEL A and MODEL B production planning";
        assert!(recognize(text).is_some());
    }

    #[test]
    fn test_unrelated_text_is_not_recognized() {
        assert!(recognize("what is the derivative of x^2?").is_none());
        assert!(recognize("maximize 3x + 2y subject to x + y <= 4").is_none());
        assert!(recognize("").is_none());
    }

    #[test]
    fn test_canonical_auto_program_solves_to_known_optimum() {
        let lp = build_auto();
        let solution = planar_solver::Solver::new().solve(&lp).unwrap();
        assert!(solution.feasible);
        assert!((solution.point.x - 450.0).abs() < 1e-9);
        assert!((solution.point.y - 300.0).abs() < 1e-9);
        assert!((solution.objective_value - 2_160_000.0).abs() < 1e-6);
    }
}
