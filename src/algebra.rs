//! Platform-bound entry point for the path operations

use crate::classify::{drive_prefix, is_absolute_path_for};
use crate::error::Result;
use crate::join::{absolutize_for, join_path_for};
use crate::normalize::split_path_for;
use crate::platform::Platform;
use crate::relative::{relative_path_for, relative_path_from_cwd_for};

/// Path operations bound to one [`Platform`] convention
///
/// Construct one per convention you need; it is `Copy` and carries no
/// other state, so it can be shared freely between threads.
///
/// # Examples
/// ```
/// use path_algebra::PathAlgebra;
///
/// let posix = PathAlgebra::posix();
/// assert_eq!(posix.join_path("/srv/app", "../static").unwrap(), "/srv/static");
///
/// let windows = PathAlgebra::windows();
/// assert_eq!(windows.relative_path("C:\\Site\\js\\app.js", "c:\\site\\pages").unwrap(), "../js/app.js");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathAlgebra {
    platform: Platform,
}

impl PathAlgebra {
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub const fn posix() -> Self {
        Self::new(Platform::Posix)
    }

    pub const fn windows() -> Self {
        Self::new(Platform::Windows)
    }

    /// Operations using the convention of the compilation target
    pub const fn host() -> Self {
        Self::new(Platform::host())
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// See [`is_absolute_path_for`]
    pub fn is_absolute_path(&self, path: &str) -> bool {
        is_absolute_path_for(path, self.platform)
    }

    /// See [`drive_prefix`]
    pub fn drive_prefix<'a>(&self, path: &'a str) -> Option<&'a str> {
        drive_prefix(path, self.platform)
    }

    /// See [`split_path_for`]
    pub fn split_path(&self, path: &str) -> Vec<String> {
        split_path_for(path, self.platform)
    }

    /// See [`relative_path_for`]
    pub fn relative_path(&self, path: &str, start: &str) -> Result<String> {
        relative_path_for(path, start, self.platform)
    }

    /// See [`relative_path_from_cwd_for`]
    pub fn relative_path_from_cwd(&self, path: &str) -> Result<String> {
        relative_path_from_cwd_for(path, self.platform)
    }

    /// See [`join_path_for`]
    pub fn join_path(&self, base: &str, path: &str) -> Result<String> {
        join_path_for(base, path, self.platform)
    }

    /// See [`absolutize_for`]
    pub fn absolutize(&self, path: &str) -> Result<String> {
        absolutize_for(path, self.platform)
    }
}

impl From<Platform> for PathAlgebra {
    fn from(platform: Platform) -> Self {
        Self::new(platform)
    }
}
