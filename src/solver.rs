use std::{
    io::{self, Write},
    process::{Command, Stdio},
    thread,
};

use crate::prelude::*;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to launch solver '{}'", program))]
    LaunchError {
        program: String,
        source: io::Error,
    },
    #[snafu(display("Failed to exchange data with solver '{}'", program))]
    PipeError {
        program: String,
        source: io::Error,
    },
}

pub trait Solver {
    /// Runs the solver on a raw clause set and returns everything it printed.
    fn classify(&self, input: &[u8]) -> Result<String, Error>;
}

/// Runs an external solver program as a child process.
///
/// The case is written to the child's stdin and its whole stdout is returned once it
/// terminates. The call blocks without a timeout. The exit status of the child is
/// not checked: a solver that crashes after printing is judged by what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(program: impl Into<String>) -> Self {
        CommandSolver {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Solver for CommandSolver {
    fn classify(&self, input: &[u8]) -> Result<String, Error> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .context(LaunchError {
                program: &self.program,
            })?;

        // Feed stdin from another thread so a chatty solver cannot block on a full
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.to_vec();
            thread::spawn(move || stdin.write_all(&input))
        });

        let output = child.wait_with_output().context(PipeError {
            program: &self.program,
        })?;

        if let Some(Ok(Err(e))) = writer.map(|handle| handle.join()) {
            // The solver may legitimately stop reading before the end of its input.
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e).context(PipeError {
                    program: &self.program,
                });
            }
        }

        if !output.status.success() {
            warn!(
                "Solver '{}' exited with {}, scoring its output anyway",
                self.program, output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
