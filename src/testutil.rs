//! Shared fixtures for unit tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes tests that write scripts, spawn children or change the current
/// directory. A script being written while another test forks fails to exec
/// with `ETXTBSY`.
pub(crate) fn lock() -> MutexGuard<'static, ()> {
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Fresh, empty directory under the system temp dir, unique to this process
/// and `tag`.
pub(crate) fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("minish_tests_{}_{}", std::process::id(), tag));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Writes `contents` to `path` and sets its permission bits to `mode`.
pub(crate) fn write_file(path: &Path, contents: &str, mode: u32) {
    fs::write(path, contents).expect("write fixture");
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("chmod fixture");
}

/// Writes a `/bin/sh` script with mode 0755.
pub(crate) fn write_script(path: &Path, body: &str) {
    write_file(path, &format!("#!/bin/sh\n{body}\n"), 0o755);
}
