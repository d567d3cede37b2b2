use academy_domain::{CallToAction, Lesson, Module};
use dioxus::prelude::*;

/// "Start Here": one highlighted card per featured lesson.
///
/// Callers skip this component entirely when `lessons` is empty.
#[component]
pub(crate) fn FeaturedSection(lessons: Vec<Lesson>) -> Element {
    rsx! {
        section { class: "featured", id: "start-here",
            h2 { "⭐ Start Here!" }
            for lesson in lessons {
                article { key: "{lesson.id}", class: "lesson-card lesson-card-featured", id: "featured-{lesson.id}",
                    span { class: "badge badge-popular", "⭐ MOST POPULAR" }
                    h3 { class: "lesson-title",
                        Marker { text: lesson.icon }
                        "{lesson.title}"
                    }
                    p { class: "lesson-description", "{lesson.description}" }
                    LessonMeta { duration: lesson.duration, difficulty: lesson.difficulty }
                    Action { cta: lesson.call_to_action(), featured: true }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ModuleSection(module: Module) -> Element {
    rsx! {
        section { class: "module", id: "{module.key}",
            div { class: "module-header",
                h3 {
                    Marker { text: module.emoji }
                    "{module.title}"
                }
                p { "{module.subtitle} • {module.duration}" }
            }
            div { class: "module-lessons",
                for lesson in module.lessons {
                    LessonCard { key: "{lesson.id}", lesson: *lesson }
                }
            }
        }
    }
}

#[component]
fn LessonCard(lesson: Lesson) -> Element {
    let cta = lesson.call_to_action();
    // The badge follows the button, not the raw status.
    let (badge_class, badge) = if cta.is_open() {
        ("badge badge-available", "✅ Ready to Learn")
    } else {
        ("badge badge-coming", "🔜 Coming Soon")
    };

    rsx! {
        article { class: "lesson-card", id: "lesson-{lesson.id}",
            div { class: "lesson-body",
                span { class: badge_class, "{badge}" }
                h4 { class: "lesson-title",
                    Marker { text: lesson.icon }
                    "{lesson.title}"
                }
                p { class: "lesson-description", "{lesson.description}" }
                LessonMeta { duration: lesson.duration, difficulty: lesson.difficulty }
            }
            div { class: "lesson-action",
                Action { cta, featured: false }
            }
        }
    }
}

/// Icon or emoji shown before a title; renders nothing when empty.
#[component]
fn Marker(text: &'static str) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    rsx! {
        span { class: "marker", "{text}" }
        " "
    }
}

#[component]
fn LessonMeta(duration: &'static str, difficulty: &'static str) -> Element {
    rsx! {
        div { class: "lesson-meta", "⏱️ {duration} • 📊 {difficulty}" }
    }
}

/// The card's button: a real link only for [`CallToAction::Open`].
#[component]
fn Action(cta: CallToAction, featured: bool) -> Element {
    match cta {
        CallToAction::Open { url } => {
            let label = if featured { "🔥 Open in Colab (Free GPU!)" } else { "🚀 Start Learning" };
            rsx! {
                a {
                    class: "cta-button",
                    href: url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{label}"
                }
            }
        },
        CallToAction::ComingSoon => rsx! {
            div { class: "cta-disabled", aria_disabled: "true", "Coming Soon!" }
        },
    }
}
