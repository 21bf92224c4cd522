//! Absolute path classification

use crate::platform::Platform;

/// Check if a path is absolute under the given convention
///
/// A leading `/` is absolute everywhere. Windows additionally accepts a
/// drive root (`C:\` or `C:/`). A leading `\`, a bare `C:` and a
/// drive-relative `C:foo` are not absolute.
///
/// # Examples
/// ```
/// use path_algebra::{is_absolute_path_for, Platform};
///
/// assert!(is_absolute_path_for("/usr/lib", Platform::Posix));
/// assert!(!is_absolute_path_for("C:\\Windows", Platform::Posix));
/// assert!(is_absolute_path_for("C:\\Windows", Platform::Windows));
/// assert!(!is_absolute_path_for("C:Windows", Platform::Windows));
/// assert!(!is_absolute_path_for("\\Windows", Platform::Windows));
/// ```
pub fn is_absolute_path_for(path: &str, platform: Platform) -> bool {
    match path.chars().next() {
        Some('/') => true,
        _ => match drive_prefix(path, platform) {
            Some(drive) => path[drive.len()..].starts_with(platform.separators()),
            None => false,
        },
    }
}

/// Return the `X:` drive anchor at the start of a path (Windows only)
///
/// # Examples
/// ```
/// use path_algebra::{drive_prefix, Platform};
///
/// assert_eq!(drive_prefix("c:\\foo", Platform::Windows), Some("c:"));
/// assert_eq!(drive_prefix("/foo", Platform::Windows), None);
/// assert_eq!(drive_prefix("c:/foo", Platform::Posix), None);
/// ```
pub fn drive_prefix(path: &str, platform: Platform) -> Option<&str> {
    if !platform.is_windows() {
        return None;
    }
    match path.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => Some(&path[..2]),
        _ => None,
    }
}

/// Whether a single component is exactly a drive anchor such as `C:`
pub(crate) fn is_drive_component(component: &str, platform: Platform) -> bool {
    component.len() == 2 && drive_prefix(component, platform).is_some()
}
