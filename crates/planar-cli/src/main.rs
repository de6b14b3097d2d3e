use clap::{Parser, Subcommand};
use std::path::PathBuf;

use planar_solver::Solver;
use planar_text::{format_solution, recognize, TEMPLATES};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Solve two-variable linear-optimization word problems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize a problem text, solve it, and print the explanation
    Solve {
        /// File containing the problem text
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show the canonical program a problem text maps to
    Recognize {
        /// File containing the problem text
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// List the registered problem templates
    Templates,
}

#[derive(serde::Serialize)]
struct SolveOutput {
    scenario: String,
    feasible: bool,
    x: f64,
    y: f64,
    x_name: String,
    y_name: String,
    objective_value: f64,
    explanation: String,
}

fn read_text(file: &PathBuf) -> String {
    match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, format } => {
            let text = read_text(&file);

            let Some(problem) = recognize(&text) else {
                eprintln!("No problem template matched the input.");
                std::process::exit(1);
            };

            let solution = match Solver::new().solve(&problem.program) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Solve error: {}", e);
                    std::process::exit(1);
                }
            };

            let explanation = format_solution(&solution, &problem);

            if format == "json" {
                let output = SolveOutput {
                    scenario: problem.scenario.name().to_string(),
                    feasible: solution.feasible,
                    x: solution.point.x,
                    y: solution.point.y,
                    x_name: problem.program.variables.x.clone(),
                    y_name: problem.program.variables.y.clone(),
                    objective_value: solution.objective_value,
                    explanation,
                };
                match serde_json::to_string_pretty(&output) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Serialization error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Scenario: {}", problem.scenario.name());
                if solution.feasible {
                    println!(
                        "{} = {}, {} = {}",
                        problem.program.variables.x,
                        solution.point.x,
                        problem.program.variables.y,
                        solution.point.y
                    );
                    println!("Objective value: {}", solution.objective_value);
                } else {
                    println!("Status: INFEASIBLE");
                }
                println!();
                println!("{}", explanation);
            }

            if !solution.feasible {
                std::process::exit(1);
            }
        }
        Commands::Recognize { file, format } => {
            let text = read_text(&file);

            match recognize(&text) {
                Some(problem) => {
                    if format == "json" {
                        match serde_json::to_string_pretty(&problem.program) {
                            Ok(s) => println!("{}", s),
                            Err(e) => {
                                eprintln!("Serialization error: {}", e);
                                std::process::exit(1);
                            }
                        }
                    } else {
                        println!("Scenario: {}", problem.scenario.name());
                        println!("{:#?}", problem.program);
                    }
                }
                None => {
                    eprintln!("No problem template matched the input.");
                    std::process::exit(1);
                }
            }
        }
        Commands::Templates => {
            for template in TEMPLATES.iter() {
                let program = template.build();
                println!("{}", template.scenario.name());
                println!("  language:    {}", template.scenario.language());
                println!(
                    "  variables:   {} (x), {} (y)",
                    program.variables.x, program.variables.y
                );
                println!("  constraints: {}", program.num_constraints());
                println!("  discrete:    {}", program.discrete);
            }
        }
    }
}
