//! Joining a base path with a possibly-relative path

use crate::classify::{drive_prefix, is_absolute_path_for, is_drive_component};
use crate::error::{PathError, Result};
use crate::normalize::split_path_for;
use crate::platform::Platform;
use log::{debug, trace};

/// Join `path` onto the absolute directory `base` and normalize the result
///
/// An absolute `path` is returned unchanged, whatever `base` is. Otherwise
/// the two are concatenated and resolved: repeated separators and `.` are
/// dropped, `..` removes the previous component, and `..` past the root is
/// discarded. The result always uses `/`.
///
/// On Windows a drive-anchored result keeps its drive in front (`C:/foo`)
/// and a bare drive gets a trailing slash (`C:/`).
///
/// # Errors
/// [`PathError::NotAbsolute`] if `path` is relative and `base` is relative too.
///
/// # Examples
/// ```
/// use path_algebra::{join_path_for, Platform};
///
/// assert_eq!(join_path_for("/foo//bar", "../baz", Platform::Posix).unwrap(), "/foo/baz");
/// assert_eq!(join_path_for("/", "../../../baz", Platform::Posix).unwrap(), "/baz");
/// assert_eq!(join_path_for("C:\\foo", "bar", Platform::Windows).unwrap(), "C:/foo/bar");
/// assert!(join_path_for("foo/bar", "quux", Platform::Posix).is_err());
/// ```
pub fn join_path_for(base: &str, path: &str, platform: Platform) -> Result<String> {
    if is_absolute_path_for(path, platform) {
        return Ok(path.to_string());
    }

    if !is_absolute_path_for(base, platform) {
        debug!("Rejecting relative base {base:?} for joining {path:?}");
        return Err(PathError::NotAbsolute {
            path: base.to_string(),
        });
    }

    // Keep the drive out of the ".." resolution so it always survives as the root
    let drive = drive_prefix(base, platform);
    let rest = &base[drive.map_or(0, str::len)..];

    let mut components: Vec<String> = drive.map(str::to_string).into_iter().collect();
    components.extend(split_path_for(&format!("{rest}/{path}"), platform));

    Ok(assemble(&components, platform))
}

/// Join `path` onto the current working directory
///
/// Same as [`join_path_for`] with `base` set to [`std::env::current_dir`].
///
/// # Errors
/// [`PathError::IoError`] if the working directory cannot be read, or any
/// error of [`join_path_for`].
pub fn absolutize_for(path: &str, platform: Platform) -> Result<String> {
    if is_absolute_path_for(path, platform) {
        return Ok(path.to_string());
    }

    let cwd = std::env::current_dir()?;
    let cwd = cwd.to_string_lossy();
    trace!("Using current directory {cwd:?} as base");
    join_path_for(&cwd, path, platform)
}

fn assemble(components: &[String], platform: Platform) -> String {
    match components {
        [drive] if is_drive_component(drive, platform) => format!("{drive}/"),
        [first, ..] if is_drive_component(first, platform) => components.join("/"),
        _ => format!("/{}", components.join("/")),
    }
}
