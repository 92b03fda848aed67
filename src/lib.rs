//! A minimal interactive command shell.
//!
//! Each input line is split on spaces into a command and its arguments. The
//! command is resolved to an executable, either as a path in its own right or
//! by searching the directories listed in `PATH`, and then run as a child
//! process with an empty environment. The shell waits for the child and
//! reports when it was killed or stopped by a signal.
//!
//! There are no builtins, pipes, redirections, quoting or expansions.
//!
//! The main entry point is [`Interpreter`]. The [`lexer`], [`resolver`] and
//! [`runner`] modules expose the individual pipeline stages.

pub mod command;
pub mod env;
pub mod error;
pub mod io_adapters;
mod interpreter;
pub mod lexer;
pub mod resolver;
pub mod runner;
#[cfg(test)]
mod testutil;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, PROMPT};
