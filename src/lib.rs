//! # path-algebra
//!
//! Relative path computation and path joining over plain strings.
//!
//! Nothing here touches the filesystem: no symlinks are followed and no
//! existence checks are made. Paths are split into components, `.` and `..`
//! are resolved syntactically, and the result is reassembled with `/`.
//! Only the `*_from_cwd` and `absolutize` helpers read the current working
//! directory.
//!
//! ## Features
//!
//! - **Relative paths**: express one absolute path in terms of another
//! - **Joining**: resolve a relative path against an absolute base
//! - **Two conventions**: POSIX, and Windows with drive letters, `\`
//!   separators and case-insensitive (Unicode-aware) comparison
//! - **No surprises at the root**: `..` beyond the root is discarded, never an error
//!
//! ## Examples
//!
//! ### Host convention
//!
//! The free functions use the convention of the compilation target.
//!
//! ```rust
//! use path_algebra::{is_absolute_path, join_path, relative_path};
//!
//! assert!(is_absolute_path("/srv/www"));
//! assert!(!is_absolute_path("www"));
//!
//! // Expressing an asset path relative to a page directory
//! let src = relative_path("/srv/www/js/app.js", "/srv/www/pages").unwrap();
//! assert_eq!(src, "../js/app.js");
//!
//! // Resolving an override against a known base
//! let config = join_path("/etc/app/conf.d", "../override.toml").unwrap();
//! assert_eq!(config, "/etc/app/override.toml");
//! ```
//!
//! ### Explicit convention
//!
//! ```rust
//! use path_algebra::{PathAlgebra, PathError};
//!
//! let windows = PathAlgebra::windows();
//! assert_eq!(windows.join_path("C:\\foo", "bar").unwrap(), "C:/foo/bar");
//! assert_eq!(windows.relative_path("C:\\ΔΈΛΤΑ\\foo", "c:\\δέλτα\\bar").unwrap(), "../foo");
//!
//! // Different drives have no relative expression
//! assert!(matches!(
//!     windows.relative_path("D:\\foo", "C:\\foo"),
//!     Err(PathError::IncompatibleRoots { .. })
//! ));
//! ```

mod algebra;
mod classify;
mod error;
mod join;
mod normalize;
mod platform;
mod relative;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use algebra::PathAlgebra;
pub use classify::{drive_prefix, is_absolute_path_for};
pub use error::{PathError, Result};
pub use join::{absolutize_for, join_path_for};
pub use normalize::{split_path_for, to_forward_slashes};
pub use platform::Platform;
pub use relative::{relative_path_for, relative_path_from_cwd_for};

/// Check if a path is absolute under the host convention
pub fn is_absolute_path(path: &str) -> bool {
    is_absolute_path_for(path, Platform::host())
}

/// Split a path into resolved components under the host convention
pub fn split_path(path: &str) -> Vec<String> {
    split_path_for(path, Platform::host())
}

/// Compute the relative path from `start` to `path` under the host convention
pub fn relative_path(path: &str, start: &str) -> Result<String> {
    relative_path_for(path, start, Platform::host())
}

/// Compute the relative path from the current directory to `path` under the host convention
pub fn relative_path_from_cwd(path: &str) -> Result<String> {
    relative_path_from_cwd_for(path, Platform::host())
}

/// Join `path` onto `base` under the host convention
pub fn join_path(base: &str, path: &str) -> Result<String> {
    join_path_for(base, path, Platform::host())
}

/// Join `path` onto the current directory under the host convention
pub fn absolutize(path: &str) -> Result<String> {
    absolutize_for(path, Platform::host())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
