use std::io;
use thiserror::Error;

/// Everything that can go wrong while handling one input line.
///
/// None of these end the session: the loop reports the error and moves on to
/// the next line.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the next line failed (not a clean end of input).
    #[error("fgets: {0}")]
    ReadInput(#[source] io::Error),

    /// No executable matched the command token.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The child process could not be created.
    #[error("fork failure: {0}")]
    Spawn(#[source] io::Error),

    /// The process was created but the resolved program could not be
    /// executed, e.g. a file with execute permission but no valid format.
    #[error("execve failure: {0}")]
    Exec(#[source] io::Error),

    /// `waitpid` itself failed; the child is abandoned.
    #[error("waitpid: {0}")]
    Wait(#[source] nix::Error),
}
