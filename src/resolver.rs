use log::{debug, warn};
use nix::unistd::{AccessFlags, access};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Longest candidate path, in bytes, that the search will try.
///
/// Longer candidates are skipped, never truncated.
pub const MAX_CANDIDATE_LEN: usize = 255;

/// Ordered list of directories searched for commands.
///
/// Derived from a `PATH`-style value by splitting on `:`. Empty segments are
/// dropped, so an empty or unset `PATH` gives an empty search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Search path for a raw `PATH` value; `None` means the variable is unset.
    pub fn parse(value: Option<&OsStr>) -> Self {
        let dirs = match value {
            Some(value) => std::env::split_paths(value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        Self { dirs }
    }

    /// Directories in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// True when no directory will be searched.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            dirs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolve a command token to an executable path.
///
/// Behavior:
/// - Empty token: returns `None`.
/// - The token itself, taken as a path relative to the current directory or
///   absolute, is returned unchanged if it is executable.
/// - A token containing `/` is never looked up in `search_path`.
/// - Otherwise each directory of `search_path` is tried in order with
///   `dir + "/" + token`, and the first executable candidate is returned.
///
/// Returns either a borrowed reference to `token` or an owned `PathBuf` when
/// the result is discovered via the search path.
pub fn resolve<'a, S>(token: &'a S, search_path: &SearchPath) -> Option<Cow<'a, Path>>
where
    S: AsRef<OsStr> + ?Sized,
{
    let token = token.as_ref();
    if token.is_empty() {
        return None;
    }

    let direct = Path::new(token);
    if is_executable(direct) {
        debug!("resolved {} directly", direct.display());
        return Some(Cow::Borrowed(direct));
    }

    if token.as_bytes().contains(&b'/') {
        return None;
    }

    find_in_path(search_path, token).map(Cow::Owned)
}

fn find_in_path(search_path: &SearchPath, token: &OsStr) -> Option<PathBuf> {
    for dir in search_path.dirs() {
        let mut candidate = OsString::from(dir.as_os_str());
        candidate.push("/");
        candidate.push(token);

        if candidate.len() > MAX_CANDIDATE_LEN {
            warn!(
                "skipping candidate of {} bytes in {}",
                candidate.len(),
                dir.display()
            );
            continue;
        }

        let candidate = PathBuf::from(candidate);
        debug!("trying {}", candidate.display());
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Whether `path` exists and the current user may execute it.
///
/// This is the `access(2)` `X_OK` check, so file type is not considered: a
/// directory with search permission passes too. Any failure of the query
/// counts as "not executable".
pub fn is_executable(path: &Path) -> bool {
    access(path, AccessFlags::X_OK).is_ok()
}
