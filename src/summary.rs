/*!
Console summary of a run.
*/

use std::io::{self, Write};

use crate::runner::Outcome;

pub const PASSED_MESSAGE: &str = "Test PASSED successfully";

/// Writes the success message, or one line per failed case in discovery order.
pub fn write_summary<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    if outcome.is_success() {
        writeln!(out, "{}", PASSED_MESSAGE)?;
    } else {
        for name in outcome.failures() {
            writeln!(out, "Test FAILED at the file \"{}\"", name)?;
        }
    }

    out.flush()
}
