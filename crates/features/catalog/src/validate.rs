//! Authoring-time consistency checks.
//!
//! Nothing here runs on the render path: the page derives every call-to-action from
//! [`Lesson::call_to_action`], so an inconsistent entry degrades to "coming soon"
//! instead of a broken link. These checks surface such entries before deploying.

use crate::error::CatalogError;
use academy_domain::{Lesson, LessonStatus, Module};
use fxhash::FxHashSet;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding; identifiers point back into the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    DuplicateModuleKey { key: &'static str },
    DuplicateLessonId { id: &'static str, module: &'static str },
    MissingModuleKey { position: usize },
    MissingLessonId { module: &'static str, position: usize },
    EmptyModule { module: &'static str },
    /// Marked available but has no usable URL; renders as coming soon.
    AvailableWithoutUrl { id: &'static str },
    /// Carries a URL that is never shown because the lesson is not available.
    ComingSoonWithUrl { id: &'static str },
    /// Featured in "Start Here" but has nothing to open.
    FeaturedNotActionable { id: &'static str },
}

impl Issue {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::DuplicateModuleKey { .. }
            | Self::DuplicateLessonId { .. }
            | Self::MissingModuleKey { .. }
            | Self::MissingLessonId { .. } => Severity::Error,
            Self::EmptyModule { .. }
            | Self::AvailableWithoutUrl { .. }
            | Self::ComingSoonWithUrl { .. }
            | Self::FeaturedNotActionable { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateModuleKey { key } => write!(f, "module key '{key}' is used more than once"),
            Self::DuplicateLessonId { id, module } => {
                write!(f, "lesson id '{id}' in module '{module}' is already used")
            },
            Self::MissingModuleKey { position } => write!(f, "module #{position} has an empty key"),
            Self::MissingLessonId { module, position } => {
                write!(f, "lesson #{position} in module '{module}' has an empty id")
            },
            Self::EmptyModule { module } => write!(f, "module '{module}' has no lessons"),
            Self::AvailableWithoutUrl { id } => {
                write!(f, "lesson '{id}' is available but has no URL; it renders as coming soon")
            },
            Self::ComingSoonWithUrl { id } => {
                write!(f, "lesson '{id}' is coming soon but carries a URL that is never shown")
            },
            Self::FeaturedNotActionable { id } => {
                write!(f, "featured lesson '{id}' has nothing to open")
            },
        }
    }
}

/// Outcome of [`crate::Catalog::validate`], issues in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| issue.severity() == Severity::Warning)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the report into a pass/fail decision.
    ///
    /// Errors always fail; warnings fail only when `strict` is set.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] listing the offending issues.
    pub fn into_result(self, strict: bool) -> Result<(), CatalogError> {
        let failing: Vec<String> = self
            .issues
            .iter()
            .filter(|issue| strict || issue.severity() == Severity::Error)
            .map(ToString::to_string)
            .collect();

        if failing.is_empty() {
            return Ok(());
        }

        Err(CatalogError::Validation {
            message: failing.join("; ").into(),
            context: Some(format!("{} issue(s)", failing.len()).into()),
        })
    }
}

pub(crate) fn validate(modules: &'static [Module]) -> ValidationReport {
    let mut issues = Vec::new();
    let mut module_keys = FxHashSet::default();
    let mut lesson_ids = FxHashSet::default();

    for (position, module) in modules.iter().enumerate() {
        if module.key.trim().is_empty() {
            issues.push(Issue::MissingModuleKey { position });
        } else if !module_keys.insert(module.key) {
            issues.push(Issue::DuplicateModuleKey { key: module.key });
        }

        if module.lessons.is_empty() {
            issues.push(Issue::EmptyModule { module: module.key });
        }

        for (position, lesson) in module.lessons.iter().enumerate() {
            if lesson.id.trim().is_empty() {
                issues.push(Issue::MissingLessonId { module: module.key, position });
            } else if !lesson_ids.insert(lesson.id) {
                issues.push(Issue::DuplicateLessonId { id: lesson.id, module: module.key });
            }
            check_link(lesson, &mut issues);
        }
    }

    ValidationReport { issues }
}

fn check_link(lesson: &'static Lesson, issues: &mut Vec<Issue>) {
    match (lesson.status, lesson.link()) {
        (LessonStatus::Available, None) => issues.push(Issue::AvailableWithoutUrl { id: lesson.id }),
        (LessonStatus::ComingSoon, Some(_)) => issues.push(Issue::ComingSoonWithUrl { id: lesson.id }),
        _ => {},
    }

    if lesson.featured && !lesson.call_to_action().is_open() {
        issues.push(Issue::FeaturedNotActionable { id: lesson.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BROKEN: [Lesson; 4] = [
        Lesson { id: "l1", status: LessonStatus::Available, ..Lesson::DRAFT },
        Lesson { id: "l1", ..Lesson::DRAFT },
        Lesson { id: "", url: Some("https://example.org"), ..Lesson::DRAFT },
        Lesson { id: "l4", featured: true, ..Lesson::DRAFT },
    ];

    static MODULES: [Module; 3] = [
        Module {
            key: "m",
            title: "",
            emoji: "",
            subtitle: "",
            duration: "",
            lessons: &BROKEN,
        },
        Module { key: "m", title: "", emoji: "", subtitle: "", duration: "", lessons: &[] },
        Module { key: " ", title: "", emoji: "", subtitle: "", duration: "", lessons: &[] },
    ];

    #[test]
    fn reports_every_issue_in_catalog_order() {
        let report = validate(&MODULES);
        assert_eq!(
            report.issues(),
            [
                Issue::AvailableWithoutUrl { id: "l1" },
                Issue::DuplicateLessonId { id: "l1", module: "m" },
                Issue::MissingLessonId { module: "m", position: 2 },
                Issue::ComingSoonWithUrl { id: "" },
                Issue::FeaturedNotActionable { id: "l4" },
                Issue::DuplicateModuleKey { key: "m" },
                Issue::EmptyModule { module: "m" },
                Issue::MissingModuleKey { position: 2 },
                Issue::EmptyModule { module: " " },
            ]
        );
        assert_eq!(report.errors().count(), 4);
        assert_eq!(report.warnings().count(), 5);
    }

    #[test]
    fn warnings_only_fail_in_strict_mode() {
        static ONLY_WARNINGS: [Module; 1] = [Module {
            key: "solo",
            title: "",
            emoji: "",
            subtitle: "",
            duration: "",
            lessons: &[],
        }];

        let report = validate(&ONLY_WARNINGS);
        assert!(!report.has_errors());
        assert!(report.clone().into_result(false).is_ok());

        let err = report.into_result(true).unwrap_err();
        assert!(err.to_string().contains("module 'solo' has no lessons"));
        assert!(err.to_string().contains("(1 issue(s))"));
    }
}
