use crate::lesson::Lesson;
use serde::Serialize;

/// A named curriculum unit with its lessons in teaching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Module {
    /// Unique across the catalog.
    pub key: &'static str,
    pub title: &'static str,
    /// Display marker rendered before the title.
    pub emoji: &'static str,
    pub subtitle: &'static str,
    /// Human label such as `"Week 2"`.
    pub duration: &'static str,
    pub lessons: &'static [Lesson],
}

impl Module {
    #[must_use]
    pub fn featured(&self) -> impl Iterator<Item = &'static Lesson> + use<> {
        let lessons: &'static [Lesson] = self.lessons;
        lessons.iter().filter(|lesson| lesson.featured)
    }
}
