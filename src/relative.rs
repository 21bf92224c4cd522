//! Relative path computation between two absolute paths

use crate::classify::{drive_prefix, is_absolute_path_for};
use crate::error::{PathError, Result};
use crate::normalize::split_path_for;
use crate::platform::Platform;
use log::{debug, trace};
use std::iter;

/// Compute the path that leads from the directory `start` to `path`
///
/// Both paths must be absolute. The result climbs out of `start` with one
/// `..` per component past the common prefix, then descends into the rest
/// of `path`. Identical paths give `.`.
///
/// On Windows, components compare case-insensitively and both paths must
/// share a root: the same drive letter, or both drive-relative (`/foo`).
///
/// # Errors
/// - [`PathError::NotAbsolute`] if `path` or `start` is relative
/// - [`PathError::IncompatibleRoots`] if the Windows roots differ
///
/// # Examples
/// ```
/// use path_algebra::{relative_path_for, Platform};
///
/// let rel = relative_path_for("/a/bat/cat/dog/../assets/img.png", "/a/bat/cat", Platform::Posix);
/// assert_eq!(rel.unwrap(), "assets/img.png");
///
/// let rel = relative_path_for("C:\\Foo\\bar", "c:\\foo\\baz", Platform::Windows);
/// assert_eq!(rel.unwrap(), "../bar");
///
/// assert!(relative_path_for("D:\\foo", "C:\\foo", Platform::Windows).is_err());
/// ```
pub fn relative_path_for(path: &str, start: &str, platform: Platform) -> Result<String> {
    for candidate in [path, start] {
        if !is_absolute_path_for(candidate, platform) {
            debug!("Rejecting relative path {candidate:?} for relative path computation");
            return Err(PathError::NotAbsolute {
                path: candidate.to_string(),
            });
        }
    }

    let path_drive = drive_prefix(path, platform);
    let start_drive = drive_prefix(start, platform);
    match (path_drive, start_drive) {
        (None, None) => {}
        (Some(a), Some(b)) if platform.components_equal(a, b) => {}
        _ => {
            debug!("No relative path from {start:?} to {path:?}: roots differ");
            return Err(PathError::IncompatibleRoots {
                path: path.to_string(),
                start: start.to_string(),
            });
        }
    }

    // The drive is part of the root, so ".." can never climb past it
    let path_components = split_path_for(&path[path_drive.map_or(0, str::len)..], platform);
    let start_components = split_path_for(&start[start_drive.map_or(0, str::len)..], platform);

    let common = path_components
        .iter()
        .zip(&start_components)
        .take_while(|(a, b)| platform.components_equal(a, b))
        .count();

    let relative = iter::repeat("..")
        .take(start_components.len() - common)
        .chain(path_components[common..].iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("/");

    if relative.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(relative)
    }
}

/// Compute the path from the current working directory to `path`
///
/// Same as [`relative_path_for`] with `start` set to
/// [`std::env::current_dir`].
///
/// # Errors
/// - [`PathError::IoError`] if the working directory cannot be read
/// - any error of [`relative_path_for`]
pub fn relative_path_from_cwd_for(path: &str, platform: Platform) -> Result<String> {
    let cwd = std::env::current_dir()?;
    let cwd = cwd.to_string_lossy();
    trace!("Using current directory {cwd:?} as start");
    relative_path_for(path, &cwd, platform)
}
