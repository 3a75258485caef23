//! Name derivation.
//!
//! Every identifier that appears in a generated package comes from the raw
//! plugin name through exactly one of the transforms in this module:
//!
//! | Transform | Input | `my-lang` | Used for |
//! |-----------|-------|-----------|----------|
//! | [`package_name`] | raw | `textbringer-my-lang` | gem name, root dir |
//! | [`pascal_case`] | raw | `MyLang` | Ruby module, test class |
//! | `+ "Mode"` | module name | `MyLangMode` | mode class |
//! | [`snake_case`] | raw | `my_lang` | test file stems |
//! | [`display_title`] | package name | `Textbringer My Lang` | README heading |
//!
//! `pascal_case` and `display_title` are deliberately separate rules:
//! `pascal_case` leaves interior letters alone, `display_title` lowercases
//! them (`fooBAR` → `FooBAR` vs `Foobar`).

use serde::Serialize;

/// Prefix shared by every Textbringer plugin gem.
pub const HOST_PREFIX: &str = "textbringer";

/// Ruby namespace the host application lives in.
pub const HOST_NAMESPACE: &str = "Textbringer";

/// Suffix appended to the module name to form the mode class.
pub const MODE_SUFFIX: &str = "Mode";

/// All names derived from a raw plugin identifier.
///
/// Computed once by [`DerivedNames::derive`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// The identifier exactly as supplied (`my-lang`).
    pub raw: String,
    /// `textbringer-my-lang`
    pub package_name: String,
    /// `MyLang`
    pub module_name: String,
    /// `MyLangMode`
    pub mode_class_name: String,
    /// `my_lang`
    pub snake_name: String,
    /// `MyLang`, computed separately from `module_name` with the same rule.
    pub test_class_stem: String,
}

impl DerivedNames {
    /// Derive the full name family from a raw identifier.
    ///
    /// Total: an empty identifier yields `textbringer-` and empty names.
    /// The CLI rejects empty names before they get here.
    pub fn derive(raw: &str) -> Self {
        let module_name = pascal_case(raw);
        let mode_class_name = format!("{module_name}{MODE_SUFFIX}");

        Self {
            raw: raw.to_string(),
            package_name: package_name(raw),
            module_name,
            mode_class_name,
            snake_name: snake_case(raw),
            test_class_stem: pascal_case(raw),
        }
    }

    /// `Textbringer::MyLang`
    pub fn qualified_module(&self) -> String {
        format!("{HOST_NAMESPACE}::{}", self.module_name)
    }

    /// `Textbringer::MyLangMode`
    pub fn qualified_mode_class(&self) -> String {
        format!("{HOST_NAMESPACE}::{}", self.mode_class_name)
    }

    /// Require path of the main library file, `textbringer/my-lang`.
    pub fn require_path(&self) -> String {
        format!("{HOST_PREFIX}/{}", self.raw)
    }

    /// Human-readable heading used by the README.
    pub fn display_title(&self) -> String {
        display_title(&self.package_name)
    }
}

/// `textbringer-<raw>`
pub fn package_name(raw: &str) -> String {
    format!("{HOST_PREFIX}-{raw}")
}

/// Convert a raw identifier to PascalCase.
///
/// ## Rules
///
/// 1. Split on `-` and `_`
/// 2. Uppercase the first character of each segment
/// 3. Leave the remaining characters untouched
/// 4. Join without separator (empty segments contribute nothing)
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "my-lang" | "MyLang" |
/// | "foo_bar" | "FooBar" |
/// | "json5" | "Json5" |
/// | "myDSL" | "MyDSL" |
pub fn pascal_case(raw: &str) -> String {
    raw.split(['-', '_'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(segment.len());
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Replace `-` with `_`. Nothing else changes.
pub fn snake_case(raw: &str) -> String {
    raw.replace('-', "_")
}

/// Title-case every `-`-delimited segment and join them with spaces.
///
/// The first character of each segment is uppercased and the rest is
/// lowercased, so `textbringer-myDSL` becomes `Textbringer Mydsl`.
pub fn display_title(package_name: &str) -> String {
    package_name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_hyphenated_name() {
        let names = DerivedNames::derive("my-lang");

        assert_eq!(names.package_name, "textbringer-my-lang");
        assert_eq!(names.module_name, "MyLang");
        assert_eq!(names.mode_class_name, "MyLangMode");
        assert_eq!(names.snake_name, "my_lang");
        assert_eq!(names.test_class_stem, "MyLang");
    }

    #[test]
    fn derives_underscored_name() {
        let names = DerivedNames::derive("foo_bar");

        assert_eq!(names.package_name, "textbringer-foo_bar");
        assert_eq!(names.module_name, "FooBar");
        assert_eq!(names.snake_name, "foo_bar");
        assert_eq!(names.qualified_module(), "Textbringer::FooBar");
        assert_eq!(names.qualified_mode_class(), "Textbringer::FooBarMode");
    }

    #[test]
    fn derivation_is_deterministic() {
        for raw in ["my-lang", "foo_bar", "x", "a--b", "json5", "myDSL", ""] {
            assert_eq!(DerivedNames::derive(raw), DerivedNames::derive(raw));
        }
    }

    #[test]
    fn test_class_stem_matches_module_name() {
        for raw in ["my-lang", "foo_bar", "mixed-case_Name", "a--b", "x"] {
            let names = DerivedNames::derive(raw);
            assert_eq!(names.test_class_stem, names.module_name, "for {raw}");
        }
    }

    #[test]
    fn pascal_case_leaves_interior_letters_alone() {
        assert_eq!(pascal_case("myDSL"), "MyDSL");
        assert_eq!(pascal_case("html-ERB"), "HtmlERB");
        assert_eq!(pascal_case("json5"), "Json5");
    }

    #[test]
    fn pascal_case_skips_empty_segments() {
        assert_eq!(pascal_case("a--b"), "AB");
        assert_eq!(pascal_case("-lead"), "Lead");
        assert_eq!(pascal_case("trail_"), "Trail");
    }

    #[test]
    fn empty_identifier_yields_degenerate_names() {
        let names = DerivedNames::derive("");

        assert_eq!(names.package_name, "textbringer-");
        assert_eq!(names.module_name, "");
        assert_eq!(names.mode_class_name, "Mode");
        assert_eq!(names.snake_name, "");
    }

    #[test]
    fn display_title_title_cases_each_segment() {
        assert_eq!(display_title("textbringer-my-lang"), "Textbringer My Lang");
        assert_eq!(display_title("textbringer-foo_bar"), "Textbringer Foo_bar");
    }

    #[test]
    fn display_title_differs_from_pascal_case_on_mixed_case() {
        let names = DerivedNames::derive("myDSL");

        assert_eq!(names.module_name, "MyDSL");
        assert_eq!(names.display_title(), "Textbringer Mydsl");
    }

    #[test]
    fn require_path_uses_raw_identifier() {
        assert_eq!(
            DerivedNames::derive("my-lang").require_path(),
            "textbringer/my-lang"
        );
    }
}
