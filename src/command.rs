use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::process::Stdio;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Abstraction over a writable output stream that can also be converted into
/// a [`Stdio`] handle for spawning external processes.
///
/// A blanket implementation exists for any type that implements `Write` and
/// `Into<Stdio>` (e.g. `std::io::Stdout` or `std::fs::File`).
pub trait Stdout: Write {
    /// Convert this output into a [`Stdio`] handle suitable for `std::process::Command`.
    fn stdio(self: Box<Self>) -> Stdio;
}

impl<T: Write + Into<Stdio>> Stdout for T {
    fn stdio(self: Box<Self>) -> Stdio {
        (*self).into()
    }
}

/// Argument list handed to a child process: the program name as typed,
/// followed by its arguments.
///
/// Never empty. Element 0 is the name used for executable resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<OsString>,
}

impl ArgVector {
    /// Build an argument vector from a token sequence, or `None` when there
    /// are no tokens (blank input).
    pub fn from_tokens(tokens: Vec<OsString>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { args: tokens })
        }
    }

    /// The command name, as typed.
    pub fn program(&self) -> &OsStr {
        &self.args[0]
    }

    /// Everything after the program name.
    pub fn args(&self) -> &[OsString] {
        &self.args[1..]
    }

    /// The whole vector, program name first.
    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }
}
