/*!
Classification of solver output into a verdict.
*/

use std::fmt::Display;

/// The only part of the solver output that carries meaning.
pub const UNSAT_MARKER: &str = "UNSATISFIABLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable,
    Unsatisfiable,
}

impl Verdict {
    /// Returns `Unsatisfiable` if the output contains [`UNSAT_MARKER`] anywhere,
    /// `Satisfiable` otherwise.
    ///
    /// The match is exact and case-sensitive. Output that is empty, malformed or
    /// reports a solver error is classified as `Satisfiable`.
    pub fn from_output(output: &str) -> Self {
        if output.contains(UNSAT_MARKER) {
            Verdict::Unsatisfiable
        } else {
            Verdict::Satisfiable
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Satisfiable => write!(f, "SAT"),
            Verdict::Unsatisfiable => write!(f, "UNSAT"),
        }
    }
}
