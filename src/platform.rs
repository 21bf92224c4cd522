//! Platform conventions
//!
//! Selects which separators are accepted, how components compare, and whether
//! drive-letter roots exist.

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

/// Path convention used by every path algebra operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `/` separators, case-sensitive components; `\` is an ordinary character
    Posix,
    /// `/` and `\` separators, case-insensitive components, `X:` drive roots
    Windows,
}

impl Platform {
    /// The convention of the platform this crate was compiled for
    pub const fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Characters accepted as separators on input
    pub const fn separators(self) -> &'static [char] {
        match self {
            Platform::Posix => &['/'],
            Platform::Windows => &['/', '\\'],
        }
    }

    /// Compare two path components under this convention.
    ///
    /// Windows comparison lowercases both sides per `char` so that non-ASCII
    /// letters match their other case (`ΔΈΛΤΑ` equals `δέλτα`). This is
    /// simple lowercasing, not full Unicode case folding: `STRASSE` does not
    /// match `straße`, and a final `ς` does not match `Σ`.
    ///
    /// # Examples
    /// ```
    /// use path_algebra::Platform;
    ///
    /// assert!(Platform::Windows.components_equal("ΔΈΛΤΑ", "δέλτα"));
    /// assert!(!Platform::Posix.components_equal("Foo", "foo"));
    /// ```
    pub fn components_equal(self, a: &str, b: &str) -> bool {
        match self {
            Platform::Posix => a == b,
            Platform::Windows => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => f.write_str("posix"),
            Platform::Windows => f.write_str("windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Platform::Posix),
            "windows" | "win32" => Ok(Platform::Windows),
            _ => Err(PathError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
