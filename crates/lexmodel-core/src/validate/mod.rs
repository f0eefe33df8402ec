//! Client-side constraint checks.
//!
//! Shapes accept any value on assignment. Before a request is bound it can be
//! walked with a [`Validator`], which records every violation of the
//! documented length, pattern, range and required-member constraints instead
//! of stopping at the first one.

mod shapes;

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{LazyLock, Mutex};

use regex::Regex;

/// Shapes that can be checked against their documented constraints.
pub trait Validate {
    /// Record every violation found in `self` into `validator`.
    fn validate_into(&self, validator: &mut Validator);
}

/// Check `value` and return all violations, if any.
pub fn validate<T: Validate + ?Sized>(value: &T) -> Result<(), ValidationReport> {
    let mut validator = Validator::new();
    value.validate_into(&mut validator);
    validator.finish()
}

/// The way a member broke its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
    Pattern {
        pattern: &'static str,
    },
    Range {
        min: i32,
        max: i32,
        actual: i32,
    },
    Items {
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::Length { min, max, actual } => {
                write!(f, "length {actual} is outside {min}..={max}")
            }
            Self::Pattern { pattern } => write!(f, "does not match {pattern}"),
            Self::Range { min, max, actual } => {
                write!(f, "value {actual} is outside {min}..={max}")
            }
            Self::Items { min, max, actual } => {
                write!(f, "{actual} items is outside {min}..={max}")
            }
        }
    }
}

/// One broken constraint, located by its member path (`slots[2].name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}

/// Every violation found in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} constraint violation(s): ", self.violations.len())?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl ValidationReport {
    /// Whether a violation was recorded at exactly `path`.
    pub fn has(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Member(&'static str),
    Index(usize),
}

/// Walks a shape tree and collects violations.
///
/// Every check takes the member name and the member's value; absent optional
/// members are skipped by all checks except [`Validator::required`].
#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<Segment>,
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Result<(), ValidationReport> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport {
                violations: self.violations,
            })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn required<T>(&mut self, member: &'static str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.record(member, ViolationKind::Required);
        }
        self
    }

    /// Length in characters.
    pub fn length(
        &mut self,
        member: &'static str,
        value: Option<&str>,
        bounds: &RangeInclusive<usize>,
    ) -> &mut Self {
        if let Some(value) = value {
            let actual = value.chars().count();
            if !bounds.contains(&actual) {
                self.record(
                    member,
                    ViolationKind::Length {
                        min: *bounds.start(),
                        max: *bounds.end(),
                        actual,
                    },
                );
            }
        }
        self
    }

    /// The whole value must match `pattern`.
    pub fn pattern(
        &mut self,
        member: &'static str,
        value: Option<&str>,
        pattern: &'static str,
    ) -> &mut Self {
        if value.is_some_and(|value| !matches_whole(pattern, value)) {
            self.record(member, ViolationKind::Pattern { pattern });
        }
        self
    }

    pub fn range(
        &mut self,
        member: &'static str,
        value: Option<i32>,
        bounds: &RangeInclusive<i32>,
    ) -> &mut Self {
        if let Some(actual) = value.filter(|actual| !bounds.contains(actual)) {
            self.record(
                member,
                ViolationKind::Range {
                    min: *bounds.start(),
                    max: *bounds.end(),
                    actual,
                },
            );
        }
        self
    }

    pub fn items<T>(
        &mut self,
        member: &'static str,
        value: Option<&[T]>,
        bounds: &RangeInclusive<usize>,
    ) -> &mut Self {
        if let Some(list) = value.filter(|list| !bounds.contains(&list.len())) {
            self.record(
                member,
                ViolationKind::Items {
                    min: *bounds.start(),
                    max: *bounds.end(),
                    actual: list.len(),
                },
            );
        }
        self
    }

    /// Length and pattern checks on each string of a list member.
    pub fn each_str(
        &mut self,
        member: &'static str,
        value: Option<&[String]>,
        bounds: &RangeInclusive<usize>,
        pattern: Option<&'static str>,
    ) -> &mut Self {
        for (index, item) in value.unwrap_or_default().iter().enumerate() {
            self.path.push(Segment::Member(member));
            let actual = item.chars().count();
            if !bounds.contains(&actual) {
                self.record_index(
                    index,
                    ViolationKind::Length {
                        min: *bounds.start(),
                        max: *bounds.end(),
                        actual,
                    },
                );
            }
            if let Some(pattern) = pattern.filter(|pattern| !matches_whole(*pattern, item)) {
                self.record_index(index, ViolationKind::Pattern { pattern });
            }
            self.path.pop();
        }
        self
    }

    pub fn nested<T: Validate>(&mut self, member: &'static str, value: Option<&T>) -> &mut Self {
        if let Some(inner) = value {
            self.path.push(Segment::Member(member));
            inner.validate_into(self);
            self.path.pop();
        }
        self
    }

    pub fn each<T: Validate>(&mut self, member: &'static str, value: Option<&[T]>) -> &mut Self {
        if let Some(list) = value {
            self.path.push(Segment::Member(member));
            for (index, item) in list.iter().enumerate() {
                self.path.push(Segment::Index(index));
                item.validate_into(self);
                self.path.pop();
            }
            self.path.pop();
        }
        self
    }

    fn record(&mut self, member: &'static str, kind: ViolationKind) {
        self.path.push(Segment::Member(member));
        let path = self.render_path();
        self.path.pop();
        self.violations.push(Violation { path, kind });
    }

    fn record_index(&mut self, index: usize, kind: ViolationKind) {
        self.path.push(Segment::Index(index));
        let path = self.render_path();
        self.path.pop();
        self.violations.push(Violation { path, kind });
    }

    fn render_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                Segment::Member(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                Segment::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Anchors `pattern` to the whole value and caches the compiled form.
fn matches_whole(pattern: &'static str, value: &str) -> bool {
    let mut cache = match PATTERNS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if !cache.contains_key(pattern) {
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(regex) => {
                cache.insert(pattern, regex);
            }
            Err(e) => {
                tracing::error!(pattern, error = %e, "constraint pattern does not compile; skipping check");
                return true;
            }
        }
    }
    cache.get(pattern).is_some_and(|regex| regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmodel_types::constraints::{BOT_NAME_LENGTH, BOT_NAME_PATTERN, VERSION_PATTERN};

    struct Named {
        name: Option<String>,
        aliases: Option<Vec<String>>,
    }

    impl Validate for Named {
        fn validate_into(&self, v: &mut Validator) {
            v.required("name", &self.name)
                .length("name", self.name.as_deref(), &BOT_NAME_LENGTH)
                .pattern("name", self.name.as_deref(), BOT_NAME_PATTERN)
                .each_str("aliases", self.aliases.as_deref(), &(1..=3), None);
        }
    }

    #[test]
    fn test_valid_value_passes() {
        let named = Named {
            name: Some("Pizza_Bot".to_string()),
            aliases: None,
        };
        assert!(validate(&named).is_ok());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let named = Named {
            name: Some("9".to_string()),
            aliases: Some(vec!["ok".to_string(), "toolong".to_string()]),
        };
        let report = validate(&named).unwrap_err();
        assert_eq!(report.violations.len(), 3);
        assert!(report.has("name"));
        assert!(report.has("aliases[1]"));
    }

    #[test]
    fn test_missing_required_member() {
        let report = validate(&Named {
            name: None,
            aliases: None,
        })
        .unwrap_err();
        assert_eq!(
            report.violations,
            vec![Violation {
                path: "name".to_string(),
                kind: ViolationKind::Required,
            }]
        );
        assert_eq!(report.to_string(), "1 constraint violation(s): name is required");
    }

    #[test]
    fn test_patterns_match_whole_value() {
        assert!(matches_whole(VERSION_PATTERN, "$LATEST"));
        assert!(matches_whole(VERSION_PATTERN, "12"));
        assert!(!matches_whole(VERSION_PATTERN, "12a"));
        assert!(!matches_whole(VERSION_PATTERN, "x$LATEST"));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut v = Validator::new();
        v.length("name", Some("éé"), &(2..=2));
        assert!(v.violations().is_empty());
    }
}
