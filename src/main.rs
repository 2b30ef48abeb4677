use std::{env::args, io, process};

use log::info;
use pretty_env_logger::formatted_builder;
use resolution_harness::{
    case::CaseRepository,
    prelude::*,
    report::Report,
    runner::{self, Outcome},
    solver::CommandSolver,
    summary::write_summary,
};

const DEFAULT_CASE_DIR: &str = "test";
const DEFAULT_SOLVER: &[&str] = &["java", "Test"];

fn usage_string() -> String {
    format!(
        "Usage: {} <command>

command:
    run [<case_dir> [<solver_program> [<solver_args>...]]]
        - run every sat*/unsat* case under case_dir (default: {}) through the solver
          (default: {})",
        args().next().unwrap_or_else(|| "resolution-harness".to_owned()),
        DEFAULT_CASE_DIR,
        DEFAULT_SOLVER.join(" "),
    )
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Unknown command '{}'\n\n{}", name, usage_string()))]
    UnknownCommand { name: String },
    #[snafu(display("Test run aborted"))]
    RunError { source: runner::Error },
    #[snafu(display("Failed to write the test summary"))]
    OutputError { source: io::Error },
}

fn solver_from_args(args: &[String]) -> CommandSolver {
    match args.split_first() {
        Some((program, rest)) => CommandSolver::new(program.as_str()).args(rest.iter().cloned()),
        None => CommandSolver::new(DEFAULT_SOLVER[0]).args(DEFAULT_SOLVER[1..].iter().copied()),
    }
}

/// Splits the arguments of `run` into the case directory and the solver command.
fn run_args(args: &[String]) -> (&str, CommandSolver) {
    let case_dir = args.get(0).map(String::as_str).unwrap_or(DEFAULT_CASE_DIR);
    (case_dir, solver_from_args(args.get(1..).unwrap_or_default()))
}

fn exit_code(outcome: &Outcome) -> i32 {
    if outcome.is_success() {
        0
    } else {
        1
    }
}

fn run_command(args: &[String]) -> Result<Outcome, Error> {
    let (case_dir, solver) = run_args(args);

    info!(
        "Running cases in '{}' with solver '{}'",
        case_dir,
        solver.program()
    );

    let repository = CaseRepository::new(case_dir);
    let outcome = runner::run(&repository, &solver).context(RunError)?;

    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), &outcome).context(OutputError)?;

    Ok(outcome)
}

fn dispatch_command(args: Vec<String>) -> Result<Option<Outcome>, Error> {
    match args.get(0).map(|s| s.as_str()) {
        Some("run") => Ok(Some(run_command(&args[1..])?)),
        Some(name) => UnknownCommand {
            name: name.to_owned(),
        }
        .fail(),
        None => {
            println!("{}", usage_string());
            Ok(None)
        }
    }
}

fn init_logger() {
    let mut builder = formatted_builder();

    if let Ok(s) = ::std::env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else if cfg!(debug_assertions) {
        builder.parse_filters("resolution_harness=debug");
    } else {
        builder.parse_filters("resolution_harness=warn");
    }

    if builder.try_init().is_err() {
        eprintln!("Failed to initialize the logger");
    }
}

fn main() -> Result<(), Report> {
    init_logger();

    let mut args = args();

    // drop arg[0]
    args.next();

    if let Some(outcome) = dispatch_command(args.collect())? {
        let code = exit_code(&outcome);
        if code != 0 {
            process::exit(code);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn run_defaults_to_java_test_on_test_dir() {
        let (case_dir, solver) = run_args(&[]);
        assert_eq!(case_dir, "test");
        assert_eq!(solver, CommandSolver::new("java").args(vec!["Test"]));
    }

    #[test]
    fn run_takes_case_dir_then_solver_command() {
        let args = strings(&["cases", "./resolve", "--quiet", "-v"]);
        let (case_dir, solver) = run_args(&args);
        assert_eq!(case_dir, "cases");
        assert_eq!(
            solver,
            CommandSolver::new("./resolve").args(vec!["--quiet", "-v"])
        );

        let args = strings(&["cases"]);
        let (case_dir, solver) = run_args(&args);
        assert_eq!(case_dir, "cases");
        assert_eq!(solver, CommandSolver::new("java").args(vec!["Test"]));
    }

    #[test]
    fn unknown_command_is_rejected() {
        match dispatch_command(strings(&["check", "cases"])) {
            Err(Error::UnknownCommand { name }) => assert_eq!(name, "check"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn no_command_prints_usage() {
        assert!(matches!(dispatch_command(Vec::new()), Ok(None)));
    }

    #[test]
    fn missing_case_dir_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let args = vec![
            "run".to_owned(),
            missing.to_string_lossy().into_owned(),
            "cat".to_owned(),
        ];
        assert!(matches!(
            dispatch_command(args),
            Err(Error::RunError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_follows_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sat1.txt"), "SATISFIABLE").unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let outcome = dispatch_command(vec!["run".to_owned(), root.clone(), "cat".to_owned()])
            .unwrap()
            .unwrap();
        assert_eq!(exit_code(&outcome), 0);

        std::fs::write(dir.path().join("unsat1.txt"), "SATISFIABLE").unwrap();
        let outcome = dispatch_command(vec!["run".to_owned(), root, "cat".to_owned()])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.failures(), &["unsat1.txt".to_owned()]);
        assert_eq!(exit_code(&outcome), 1);
    }
}
