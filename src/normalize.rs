//! Path component splitting
//!
//! Every operation in this crate works on the component sequence produced
//! here: non-empty segments with `.` removed and `..` already resolved.

use crate::platform::Platform;
use std::borrow::Cow;

/// Rewrite a path to use only forward slashes
///
/// On Windows backslashes become `/`. On POSIX a backslash is an ordinary
/// filename character and the path is returned untouched.
///
/// # Examples
/// ```
/// use path_algebra::{to_forward_slashes, Platform};
///
/// assert_eq!(to_forward_slashes("C:\\foo\\bar", Platform::Windows), "C:/foo/bar");
/// assert_eq!(to_forward_slashes("foo\\bar", Platform::Posix), "foo\\bar");
/// ```
pub fn to_forward_slashes(path: &str, platform: Platform) -> Cow<'_, str> {
    if platform.is_windows() && path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Split a path into its resolved components
///
/// Segments are processed left to right against a stack:
/// - empty segments (repeated or trailing separators) and `.` are skipped
/// - `..` pops the previous component; with nothing to pop it is dropped
/// - anything else is pushed
///
/// A leading `..` is never recorded, so the result always reads as if the
/// path were anchored at a root.
///
/// # Examples
/// ```
/// use path_algebra::{split_path_for, Platform};
///
/// assert_eq!(split_path_for("/a//b/./c/../d/", Platform::Posix), vec!["a", "b", "d"]);
/// assert_eq!(split_path_for("../../x", Platform::Posix), vec!["x"]);
/// assert_eq!(split_path_for("C:\\foo\\bar", Platform::Windows), vec!["C:", "foo", "bar"]);
/// ```
pub fn split_path_for(path: &str, platform: Platform) -> Vec<String> {
    let path = to_forward_slashes(path, platform);
    let mut components: Vec<String> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            _ => components.push(segment.to_string()),
        }
    }

    components
}
