//! Launching a resolved executable and waiting for it.

use crate::command::{ArgVector, ExitCode, Stdout};
use crate::error::ShellError;
use log::{debug, warn};
use nix::errno::Errno;
use nix::libc;
use nix::unistd::Pid;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::os::unix::process::CommandExt;
use std::path::{Component, Path};
use std::process::Command;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program exited on its own with this status code.
    Exited(ExitCode),
    /// The program was terminated by this signal number.
    Signaled(i32),
}

impl Outcome {
    /// Message to show the user, if this outcome warrants one.
    ///
    /// Normal exits are silent whatever their code.
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::Exited(_) => None,
            Outcome::Signaled(signal) => Some(format!("killed by signal {signal}")),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exited(code) => write!(f, "exited, status={code}"),
            Outcome::Signaled(signal) => write!(f, "killed by signal {signal}"),
        }
    }
}

/// Runs `path` with `argv` and blocks until it exits or is killed.
///
/// The child starts with an empty environment, inherits stdin and stderr,
/// and writes its standard output to `stdout`. `argv[0]` is passed as typed.
/// Each time the child is stopped, `stopped by signal N` is written to
/// `report` and the wait resumes on the same child.
///
/// A program that cannot be executed is reported as [`ShellError::Exec`];
/// only a failure to create the process at all is [`ShellError::Spawn`].
pub fn run(
    path: &Path,
    argv: &ArgVector,
    stdout: Box<dyn Stdout>,
    report: &mut dyn Write,
) -> Result<Outcome, ShellError> {
    let child = Command::new(launch_path(path).as_os_str())
        .arg0(argv.program())
        .args(argv.args())
        .env_clear()
        .stdout(stdout.stdio())
        .spawn()
        .map_err(launch_error)?;

    let pid = Pid::from_raw(child.id() as i32);
    debug!("spawned {} as pid {pid}", path.display());
    wait_for(pid, report)
}

/// A bare relative name like `prog` would be looked up in the child's PATH by
/// the launcher; anchor it to the current directory instead.
fn launch_path(path: &Path) -> Cow<'_, Path> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Cow::Owned(Path::new(".").join(path)),
        _ => Cow::Borrowed(path),
    }
}

/// The launcher reports exec errors from the child back through `spawn`.
/// Only resource exhaustion means the process itself was never created.
fn launch_error(e: io::Error) -> ShellError {
    match e.raw_os_error() {
        Some(libc::EAGAIN | libc::ENOMEM) => ShellError::Spawn(e),
        _ => ShellError::Exec(e),
    }
}

fn wait_for(pid: Pid, report: &mut dyn Write) -> Result<Outcome, ShellError> {
    loop {
        let mut status: libc::c_int = 0;
        // SAFETY: `status` is a live, writable c_int for the whole call.
        let rc = unsafe { libc::waitpid(pid.as_raw(), &mut status, libc::WUNTRACED) };
        Errno::result(rc).map_err(ShellError::Wait)?;
        debug!("pid {pid}: wait status {status:#x}");

        if libc::WIFEXITED(status) {
            return Ok(Outcome::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(Outcome::Signaled(libc::WTERMSIG(status)));
        }
        if libc::WIFSTOPPED(status) {
            let signal = libc::WSTOPSIG(status);
            if let Err(e) = writeln!(report, "stopped by signal {signal}") {
                warn!("could not report stop of pid {pid}: {e}");
            }
        }
    }
}
