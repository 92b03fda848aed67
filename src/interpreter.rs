use crate::command::{ArgVector, Stdout};
use crate::env::Environment;
use crate::error::ShellError;
use crate::io_adapters::LineSource;
use crate::lexer;
use crate::resolver;
use crate::runner::{self, Outcome};
use log::{debug, warn};
use std::io::{self, Write};

/// Printed before every line is read.
pub const PROMPT: &str = "$ ";

/// Consecutive read failures after which the input is treated as gone.
const MAX_READ_ERRORS: usize = 8;

/// A minimal shell that runs one external program per input line.
///
/// Each line is split into tokens, the first token is resolved against the
/// directories in `PATH`, and the program is run with an empty environment
/// until it exits or is killed.
///
/// Example
/// ```
/// use minish::Interpreter;
/// let sh = Interpreter::default();
/// let outcome = sh.execute_line(b"   ", Box::new(std::io::stdout()), &mut std::io::sink());
/// assert!(outcome.unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create an interpreter that resolves commands through `env`.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Run a single input line, given as raw bytes.
    ///
    /// Returns `Ok(None)` for a blank line, the child's [`Outcome`] once it
    /// has finished, or the error that stopped the line from running. Stop
    /// notices for the child are written to `report` while waiting.
    pub fn execute_line(
        &self,
        line: &[u8],
        stdout: Box<dyn Stdout>,
        report: &mut dyn Write,
    ) -> Result<Option<Outcome>, ShellError> {
        let tokens = lexer::tokenize(line);
        debug!("tokens: {tokens:?}");
        let Some(argv) = ArgVector::from_tokens(tokens) else {
            return Ok(None);
        };

        let search_path = self.env.search_path();
        let path = resolver::resolve(argv.program(), &search_path).ok_or_else(|| {
            ShellError::CommandNotFound(argv.program().to_string_lossy().into_owned())
        })?;
        debug!("{:?} resolved to {}", argv.program(), path.display());

        runner::run(&path, &argv, stdout, report).map(Some)
    }

    /// Read-Eval-Print Loop.
    ///
    /// Runs until `source` reports end of input. Children write straight to
    /// the process stdout; signal notices go to `out` and diagnostics to
    /// `err`. Failures of a single line never end the loop.
    pub fn repl(
        &self,
        source: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let mut read_errors = 0;
        loop {
            let line = match source.read_line(PROMPT, out) {
                Ok(Some(line)) => {
                    read_errors = 0;
                    line
                }
                Ok(None) => return Ok(()),
                Err(e) => {
                    writeln!(err, "{}", ShellError::ReadInput(e))?;
                    read_errors += 1;
                    if read_errors >= MAX_READ_ERRORS {
                        warn!("{read_errors} consecutive read errors, treating input as closed");
                        return Ok(());
                    }
                    continue;
                }
            };

            match self.execute_line(&line, Box::new(io::stdout()), out) {
                Ok(Some(outcome)) => {
                    debug!("{outcome}");
                    if let Some(notice) = outcome.notice() {
                        writeln!(out, "{notice}")?;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(err, "{e}")?,
            }
            out.flush()?;
        }
    }
}
