use planar_solver::{Constraint, Direction, LinearProgram, Solution};

use crate::templates::{RecognizedProblem, Scenario};

/// Fixed message for programs whose feasible region is empty.
pub const NO_FEASIBLE_SOLUTION: &str =
    "No feasible solution exists: the constraints contradict each other.";

/// Render a solved program into a markdown explanation.
///
/// Dispatch is an exhaustive match on the scenario tag, so every template
/// in the registry has exactly one formatter and no text can fall through
/// to the wrong one.
pub fn format_solution(solution: &Solution, problem: &RecognizedProblem) -> String {
    if !solution.feasible {
        return NO_FEASIBLE_SOLUTION.to_string();
    }
    match problem.scenario {
        Scenario::AutoManufacturer => format_auto(solution, &problem.program),
        Scenario::ToolManufacturer => format_tool(solution, &problem.program),
    }
}

fn format_auto(solution: &Solution, lp: &LinearProgram) -> String {
    let mut out = String::new();
    out.push_str("## Production plan\n\n");
    out.push_str(&format!(
        "An automobile manufacturer chooses how many units of {} (x) and {} (y) to build.\n\n",
        lp.variables.x, lp.variables.y
    ));
    out.push_str(&format!(
        "**Objective:** {} P = {}\n\n",
        direction_word(lp.objective.direction, "en"),
        fmt_linear(lp.objective.a, lp.objective.b)
    ));
    out.push_str("**Constraints:**\n");
    for c in &lp.constraints {
        out.push_str(&format!("- {}\n", constraint_line(c)));
    }
    out.push_str("- x >= 0, y >= 0\n\n");
    out.push_str("**Optimal plan:**\n");
    out.push_str(&format!(
        "- {}: x = {}\n",
        lp.variables.x,
        fmt_value(solution.point.x)
    ));
    out.push_str(&format!(
        "- {}: y = {}\n",
        lp.variables.y,
        fmt_value(solution.point.y)
    ));
    out.push_str(&format!(
        "- Profit: P = {}\n\n",
        fmt_value(solution.objective_value)
    ));
    out.push_str("**Verification:**\n");
    for c in &lp.constraints {
        out.push_str(&format!("- {}\n", verification_line(c, solution)));
    }
    out
}

fn format_tool(solution: &Solution, lp: &LinearProgram) -> String {
    let mut out = String::new();
    out.push_str("## Produktionsplan\n\n");
    out.push_str(&format!(
        "Ein Betrieb fertigt {} (x) und {} (y) in ganzen Stückzahlen.\n\n",
        lp.variables.x, lp.variables.y
    ));
    out.push_str(&format!(
        "**Zielfunktion:** {} G = {}\n\n",
        direction_word(lp.objective.direction, "de"),
        fmt_linear(lp.objective.a, lp.objective.b)
    ));
    out.push_str("**Nebenbedingungen:**\n");
    for c in &lp.constraints {
        out.push_str(&format!("- {}\n", constraint_line(c)));
    }
    out.push_str("- x >= 0, y >= 0\n\n");
    out.push_str("**Optimaler Plan:**\n");
    out.push_str(&format!(
        "- {}: x = {} Stück\n",
        lp.variables.x,
        fmt_value(solution.point.x)
    ));
    out.push_str(&format!(
        "- {}: y = {} Stück\n",
        lp.variables.y,
        fmt_value(solution.point.y)
    ));
    out.push_str(&format!(
        "- Gewinn: G = {}\n\n",
        fmt_value(solution.objective_value)
    ));
    out.push_str("**Prüfung:**\n");
    for c in &lp.constraints {
        out.push_str(&format!("- {}\n", verification_line(c, solution)));
    }
    out
}

fn direction_word(direction: Direction, language: &str) -> &'static str {
    match (direction, language) {
        (Direction::Maximize, "de") => "maximiere",
        (Direction::Minimize, "de") => "minimiere",
        (Direction::Maximize, _) => "maximize",
        (Direction::Minimize, _) => "minimize",
    }
}

fn constraint_line(c: &Constraint) -> String {
    format!(
        "{}: {} {} {}",
        c.label,
        fmt_linear(c.a, c.b),
        c.relation.symbol(),
        fmt_value(c.rhs)
    )
}

/// Re-check one constraint arithmetically at the solved point.
fn verification_line(c: &Constraint, solution: &Solution) -> String {
    let lhs = c.lhs(solution.point.x, solution.point.y);
    format!(
        "{}: {} = {} {} {} ✓",
        c.label,
        fmt_linear_at(c.a, c.b, solution.point.x, solution.point.y),
        fmt_value(lhs),
        c.relation.symbol(),
        fmt_value(c.rhs)
    )
}

/// `a*x + b*y` with zero terms and unit coefficients elided.
fn fmt_linear(a: f64, b: f64) -> String {
    let mut parts = Vec::new();
    if a != 0.0 {
        parts.push(fmt_term(a, "x"));
    }
    if b != 0.0 {
        parts.push(fmt_term(b, "y"));
    }
    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(" + ")
    }
}

fn fmt_term(coef: f64, var: &str) -> String {
    if coef == 1.0 {
        var.to_string()
    } else {
        format!("{}{}", fmt_value(coef), var)
    }
}

fn fmt_linear_at(a: f64, b: f64, x: f64, y: f64) -> String {
    let mut parts = Vec::new();
    if a != 0.0 {
        parts.push(fmt_product(a, x));
    }
    if b != 0.0 {
        parts.push(fmt_product(b, y));
    }
    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(" + ")
    }
}

fn fmt_product(coef: f64, value: f64) -> String {
    if coef == 1.0 {
        fmt_value(value)
    } else {
        format!("{}·{}", fmt_value(coef), fmt_value(value))
    }
}

/// Integral values print without decimals (discrete solutions and whole
/// quantities), everything else with two.
fn fmt_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{recognize, RecognizedProblem};
    use planar_solver::{Solution, Solver};

    fn solve_text(text: &str) -> (Solution, RecognizedProblem) {
        let problem = recognize(text).expect("text should match a template");
        let solution = Solver::new().solve(&problem.program).unwrap();
        (solution, problem)
    }

    #[test]
    fn test_infeasible_message_is_fixed() {
        let problem = recognize("automobile plant making Model A and Model B").unwrap();
        let explanation = format_solution(&Solution::infeasible(), &problem);
        assert_eq!(explanation, NO_FEASIBLE_SOLUTION);
    }

    #[test]
    fn test_auto_explanation_contents() {
        let (solution, problem) =
            solve_text("An automobile manufacturer builds Model A and Model B.");
        let text = format_solution(&solution, &problem);

        assert!(text.contains("maximize P = 2400x + 3600y"));
        assert!(text.contains("Model A: x = 450"));
        assert!(text.contains("Model B: y = 300"));
        assert!(text.contains("Profit: P = 2160000"));
        // Every constraint shows up in the verification block
        for c in &problem.program.constraints {
            assert!(
                text.matches(&c.label).count() >= 2,
                "constraint '{}' missing from statement or verification",
                c.label
            );
        }
        assert!(text.contains("x + y <= 750"));
        assert!(text.contains("✓"));
    }

    #[test]
    fn test_tool_explanation_is_german_and_integral() {
        let (solution, problem) =
            solve_text("Werkzeug C und D, 4000 Arbeitsstunden, Materialkosten 1500");
        let text = format_solution(&solution, &problem);

        assert!(text.contains("Zielfunktion"));
        assert!(text.contains("maximiere G = 8x + 5y"));
        assert!(text.contains("Prüfung"));
        // Discrete display never shows decimals for the quantities
        assert!(text.contains(&format!("Werkzeug C: x = {} Stück", solution.point.x as i64)));
        assert!(text.contains(&format!("Werkzeug D: y = {} Stück", solution.point.y as i64)));
    }

    #[test]
    fn test_verification_recomputes_lhs() {
        let (solution, problem) =
            solve_text("Werkzeug C und D, Arbeitsstunden sind knapp");
        let text = format_solution(&solution, &problem);

        let lhs = 5.0 * solution.point.x + 6.0 * solution.point.y;
        assert!(text.contains(&format!("= {} <= 4000", super::fmt_value(lhs))));
    }
}
