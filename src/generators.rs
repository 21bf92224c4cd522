//! Property test generators for path algebra
//!
//! Strategies for components, absolute paths in both conventions, and
//! noisy spellings of those paths (repeated separators, `.` segments,
//! mixed separators, `..` detours) that must resolve to the same components.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a single plain component (never `.` or `..`)
    pub fn component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}"
            .prop_filter("Not a dot segment", |s| s != "." && s != "..")
    }

    /// Generate components with non-ASCII letters that have case variants
    pub fn unicode_component() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("δέλτα".to_string()),
            Just("ΔΈΛΤΑ".to_string()),
            Just("файл".to_string()),
            Just("ФАЙЛ".to_string()),
            Just("Ünïcödé".to_string()),
            Self::component(),
        ]
    }

    /// Generate a list of components
    pub fn components(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(Self::component(), 0..=max)
    }

    /// Generate a drive letter anchor such as `C:` or `d:`
    pub fn drive() -> impl Strategy<Value = String> {
        "[a-zA-Z]".prop_map(|letter| format!("{}:", letter))
    }

    /// Generate a clean POSIX absolute path
    pub fn posix_absolute_path() -> impl Strategy<Value = String> {
        Self::components(6).prop_map(|parts| format!("/{}", parts.join("/")))
    }

    /// Generate a clean drive-anchored Windows path with backslashes
    pub fn windows_absolute_path() -> impl Strategy<Value = String> {
        (Self::drive(), Self::components(6))
            .prop_map(|(drive, parts)| format!("{}\\{}", drive, parts.join("\\")))
    }

    /// Generate a clean POSIX relative path (may contain leading `..`)
    pub fn relative_path() -> impl Strategy<Value = String> {
        (0usize..4, Self::components(4)).prop_map(|(ups, parts)| {
            let mut segments = vec!["..".to_string(); ups];
            segments.extend(parts);
            segments.join("/")
        })
    }
}

/// Test case generators for specific scenarios
pub struct ScenarioGenerators;

impl ScenarioGenerators {
    /// Generate components with a noisy spelling that resolves to them
    ///
    /// The spelling uses the given separators, doubles some of them, and
    /// inserts `.` segments and `name/..` detours.
    pub fn noisy_spelling(separators: &'static [char]) -> impl Strategy<Value = (Vec<String>, String)> {
        PathGenerators::components(6).prop_flat_map(move |parts| {
            let noise = prop::collection::vec((0usize..4, 0..separators.len()), parts.len());
            (Just(parts), noise).prop_map(move |(parts, noise)| {
                let mut spelled = String::new();
                for (part, (kind, sep)) in parts.iter().zip(noise) {
                    let sep = separators[sep];
                    spelled.push(sep);
                    match kind {
                        0 => spelled.push(sep),
                        1 => {
                            spelled.push('.');
                            spelled.push(sep);
                        }
                        2 => {
                            spelled.push_str("detour");
                            spelled.push(sep);
                            spelled.push_str("..");
                            spelled.push(sep);
                        }
                        _ => {}
                    }
                    spelled.push_str(part);
                }
                spelled.push(separators[0]);
                (parts, spelled)
            })
        })
    }

    /// Generate two Windows paths on one drive whose letter case differs
    pub fn same_drive_pair() -> impl Strategy<Value = (String, String)> {
        (
            PathGenerators::drive(),
            prop::collection::vec(PathGenerators::unicode_component(), 0..=4),
            prop::collection::vec(PathGenerators::unicode_component(), 0..=4),
        )
            .prop_map(|(drive, a, b)| {
                (
                    format!("{}\\{}", drive.to_uppercase(), a.join("\\")),
                    format!("{}\\{}", drive.to_lowercase(), b.join("\\")),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathAlgebra, PathError, Platform};

    proptest! {
        #[test]
        fn components_are_never_dot_segments(component in PathGenerators::component()) {
            prop_assert!(component != "." && component != "..");
            prop_assert!(!component.contains('/'));
        }

        #[test]
        fn noisy_posix_spelling_splits_to_components(
            (parts, spelled) in ScenarioGenerators::noisy_spelling(Platform::Posix.separators())
        ) {
            prop_assert_eq!(PathAlgebra::posix().split_path(&spelled), parts);
        }

        #[test]
        fn noisy_windows_spelling_splits_to_components(
            (parts, spelled) in ScenarioGenerators::noisy_spelling(Platform::Windows.separators())
        ) {
            prop_assert_eq!(PathAlgebra::windows().split_path(&spelled), parts);
        }

        #[test]
        fn windows_identity(path in PathGenerators::windows_absolute_path()) {
            prop_assert_eq!(PathAlgebra::windows().relative_path(&path, &path).unwrap(), ".");
        }

        #[test]
        fn windows_round_trip((path, start) in ScenarioGenerators::same_drive_pair()) {
            let algebra = PathAlgebra::windows();
            let relative = algebra.relative_path(&path, &start).unwrap();
            let joined = algebra.join_path(&start, &relative).unwrap();

            let expected = algebra.split_path(&path);
            let actual = algebra.split_path(&joined);
            prop_assert_eq!(expected.len(), actual.len());
            for (a, b) in expected.iter().zip(&actual) {
                prop_assert!(Platform::Windows.components_equal(a, b), "{} != {}", a, b);
            }
        }

        #[test]
        fn windows_drive_survives_overflow(
            base in PathGenerators::windows_absolute_path(),
            path in PathGenerators::relative_path()
        ) {
            let algebra = PathAlgebra::windows();
            let joined = algebra.join_path(&base, &path).unwrap();
            prop_assert_eq!(algebra.drive_prefix(&joined), algebra.drive_prefix(&base));
            prop_assert!(algebra.is_absolute_path(&joined));
        }

        #[test]
        fn windows_other_drive_is_rejected(
            path in PathGenerators::windows_absolute_path(),
            start in PathGenerators::windows_absolute_path()
        ) {
            let algebra = PathAlgebra::windows();
            let same_drive = Platform::Windows.components_equal(
                algebra.drive_prefix(&path).unwrap(),
                algebra.drive_prefix(&start).unwrap(),
            );
            let result = algebra.relative_path(&path, &start);
            if same_drive {
                prop_assert!(result.is_ok());
            } else {
                let rejected = matches!(result, Err(PathError::IncompatibleRoots { .. }));
                prop_assert!(rejected);
            }
        }
    }
}
