//! Splitting of a raw input line into command tokens.
//!
//! There is no quoting, escaping or substitution: a line is cut on runs of the
//! ASCII space character and nothing else. Tabs are ordinary token characters.
//! Lines are bytes, so tokens that are not valid UTF-8 survive unchanged.

use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

/// The only byte that separates tokens.
pub const DELIMITER: u8 = b' ';

/// Splits `line` into its space-separated tokens.
///
/// Consecutive delimiters never produce empty tokens, and the tokens keep
/// their left-to-right order. An empty or all-space line yields an empty
/// vector, which callers treat as "no command".
pub fn tokenize(line: &[u8]) -> Vec<OsString> {
    line.split(|&b| b == DELIMITER)
        .filter(|token| !token.is_empty())
        .map(|token| OsString::from_vec(token.to_vec()))
        .collect()
}
