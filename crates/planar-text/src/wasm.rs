//! WASM bindings for planar
//!
//! JavaScript-friendly entry points for the browser calculator UI: hand a
//! problem text in, get the solved quantities and a markdown explanation
//! back.

use wasm_bindgen::prelude::*;

use crate::format::format_solution;
use crate::templates::{recognize, TEMPLATES};
use planar_solver::Solver;

#[derive(serde::Serialize)]
struct SolveResult {
    scenario: String,
    feasible: bool,
    x: f64,
    y: f64,
    x_name: String,
    y_name: String,
    objective_value: f64,
    explanation: String,
}

/// Recognize and solve a problem text.
///
/// Returns `null` when no template matches (the caller falls back to its
/// own path), otherwise a `SolveResult` object.
#[wasm_bindgen]
pub fn solve_text(text: &str) -> Result<JsValue, JsValue> {
    let Some(problem) = recognize(text) else {
        return Ok(JsValue::NULL);
    };

    let solution = Solver::new()
        .solve(&problem.program)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let explanation = format_solution(&solution, &problem);

    let result = SolveResult {
        scenario: problem.scenario.name().to_string(),
        feasible: solution.feasible,
        x: solution.point.x,
        y: solution.point.y,
        x_name: problem.program.variables.x.clone(),
        y_name: problem.program.variables.y.clone(),
        objective_value: solution.objective_value,
        explanation,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether any template matches the text, without solving.
#[wasm_bindgen]
pub fn can_solve(text: &str) -> bool {
    recognize(text).is_some()
}

#[derive(serde::Serialize)]
struct TemplateInfo {
    scenario: String,
    language: String,
    x_name: String,
    y_name: String,
    discrete: bool,
}

/// List the registered problem templates.
#[wasm_bindgen]
pub fn list_templates() -> Result<js_sys::Array, JsValue> {
    let out = js_sys::Array::new();
    for t in TEMPLATES.iter() {
        let program = t.build();
        let info = TemplateInfo {
            scenario: t.scenario.name().to_string(),
            language: t.scenario.language().to_string(),
            x_name: program.variables.x,
            y_name: program.variables.y,
            discrete: program.discrete,
        };
        let value =
            serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))?;
        out.push(&value);
    }
    Ok(out)
}
