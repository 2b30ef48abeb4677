/*!
The test runner: dispatches every tagged case to the solver and scores the verdicts.
*/

use crate::{
    case::{self, CaseRepository, TestCase},
    prelude::*,
    solver::{self, Solver},
    verdict::Verdict,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to collect test cases"))]
    CaseError { source: case::Error },
    #[snafu(display("Solver failed on test case '{}'", name))]
    SolverError {
        name: String,
        source: solver::Error,
    },
}

/// Result of one run over a case repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    passed: usize,
    /// Files whose name matches neither tag.
    skipped: usize,
    /// Names of failed cases, in discovery order.
    failures: Vec<String>,
}

impl Outcome {
    pub fn record(mut self, name: &str, expected: Verdict, actual: Verdict) -> Self {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failures.push(name.to_owned());
        }
        self
    }

    pub fn skip(mut self) -> Self {
        self.skipped += 1;
        self
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

fn dispatch<S: Solver + ?Sized>(case: &TestCase, solver: &S) -> Result<Verdict, Error> {
    let content = case.content().context(CaseError)?;
    let output = solver
        .classify(&content)
        .context(SolverError { name: case.name() })?;

    let verdict = Verdict::from_output(&output);
    debug!(
        "{}: expected {}, solver said {}",
        case.path().display(),
        case.expected(),
        verdict
    );

    Ok(verdict)
}

/// Runs every tagged case of the repository through the solver.
///
/// Untagged files are counted as skipped and never reach the solver. The first
/// filesystem or solver error aborts the run.
pub fn run<S: Solver + ?Sized>(
    repository: &CaseRepository,
    solver: &S,
) -> Result<Outcome, Error> {
    let outcome = repository
        .entries()
        .try_fold(Outcome::default(), |outcome, entry| -> Result<_, Error> {
            let entry = entry.context(CaseError)?;
            let case = match entry.into_case() {
                Ok(case) => case,
                Err(untagged) => {
                    debug!("Skipping untagged file '{}'", untagged.path().display());
                    return Ok(outcome.skip());
                }
            };

            let actual = dispatch(&case, solver)?;
            Ok(outcome.record(case.name(), case.expected(), actual))
        })?;

    info!(
        "{} passed, {} failed, {} skipped in '{}'",
        outcome.passed(),
        outcome.failures().len(),
        outcome.skipped(),
        repository.root().display()
    );

    Ok(outcome)
}
