use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

/// Availability of a lesson's notebook.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LessonStatus {
    Available,
    ComingSoon,
}

/// A single unit of content, linked to an externally hosted notebook.
///
/// Lessons are authored as `static` data; see [`Lesson::DRAFT`] for the
/// struct-update base used by catalog literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lesson {
    /// Unique across the whole catalog.
    pub id: &'static str,
    pub title: &'static str,
    /// Human label such as `"1.5 hours"`.
    pub duration: &'static str,
    /// Open set of labels (`"Beginner"`, `"Advanced"`, ...).
    pub difficulty: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
    pub status: LessonStatus,
    pub featured: bool,
    /// Display marker rendered next to the title.
    pub icon: &'static str,
}

impl Lesson {
    /// An unpublished lesson with every text field empty.
    pub const DRAFT: Self = Self {
        id: "",
        title: "",
        duration: "",
        difficulty: "",
        description: "",
        url: None,
        status: LessonStatus::ComingSoon,
        featured: false,
        icon: "",
    };

    /// The URL, if one is present and not blank.
    #[must_use]
    pub fn link(&self) -> Option<&'static str> {
        self.url.filter(|url| !url.trim().is_empty())
    }

    /// Decides what the lesson's button does.
    ///
    /// Only `available` lessons with a non-blank URL link out; everything else,
    /// including an `available` lesson missing its URL, is shown as coming soon.
    #[must_use]
    pub fn call_to_action(&self) -> CallToAction {
        match (self.status, self.link()) {
            (LessonStatus::Available, Some(url)) => CallToAction::Open { url },
            _ => CallToAction::ComingSoon,
        }
    }
}

/// The rendered affordance of a lesson card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallToAction {
    /// Link to the notebook, opened in a new browsing context.
    Open { url: &'static str },
    /// Disabled placeholder; never navigable.
    ComingSoon,
}

impl CallToAction {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}
