pub mod format;
pub mod templates;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use format::{format_solution, NO_FEASIBLE_SOLUTION};
pub use templates::{recognize, ProblemTemplate, RecognizedProblem, Scenario, TEMPLATES};
