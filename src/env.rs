use crate::resolver::SearchPath;
use std::env as stdenv;
use std::ffi::OsString;

/// Name of the variable listing the directories searched for commands.
pub const PATH_VAR: &str = "PATH";

/// Read-only view of the process environment used for command resolution.
///
/// By default every lookup goes back to the live process environment, so a
/// `PATH` changed between two commands is picked up by the second one. Tests
/// and embedders can pin a fixed value with [`Environment::with_path`].
#[derive(Debug, Clone, Default)]
pub struct Environment {
    fixed_path: Option<Option<OsString>>,
}

impl Environment {
    /// Environment that reads `PATH` from the running process on each call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose `PATH` is always `path` (`None` meaning unset).
    pub fn with_path(path: Option<impl Into<OsString>>) -> Self {
        Self {
            fixed_path: Some(path.map(Into::into)),
        }
    }

    /// Current raw value of `PATH`, if set.
    pub fn path_var(&self) -> Option<OsString> {
        match &self.fixed_path {
            Some(fixed) => fixed.clone(),
            None => stdenv::var_os(PATH_VAR),
        }
    }

    /// Fresh search path, derived from the current `PATH` value.
    pub fn search_path(&self) -> SearchPath {
        SearchPath::parse(self.path_var().as_deref())
    }
}
