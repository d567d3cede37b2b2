use academy::catalog::Catalog;
use academy::domain::{CallToAction, Lesson};
use anyhow::Result;

/// Lists modules and lessons in catalog order, as text or JSON.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_lessons(json: bool) -> Result<()> {
    let catalog = Catalog::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for module in catalog.modules() {
        println!(
            "{} {} [{}] {} • {}",
            module.emoji, module.title, module.key, module.subtitle, module.duration
        );
        for lesson in module.lessons {
            println!("   {}", lesson_line(lesson));
        }
    }

    let stats = catalog.stats();
    println!(
        "\n{} modules, {} lessons: {} ready, {} coming soon, {} featured",
        stats.modules, stats.lessons, stats.available, stats.coming_soon, stats.featured
    );
    Ok(())
}

/// Prints the featured lessons with their notebook links.
pub fn list_featured() {
    let featured = Catalog::builtin().featured_lessons();

    if featured.is_empty() {
        println!("ℹ️ No featured lessons.");
        return;
    }

    for lesson in featured {
        println!("⭐ {}", lesson_line(lesson));
        if let CallToAction::Open { url } = lesson.call_to_action() {
            println!("   {url}");
        }
    }
}

fn lesson_line(lesson: &Lesson) -> String {
    let marker = if lesson.call_to_action().is_open() { "✅" } else { "🔜" };
    format!("{marker} {} {} ({}, {})", lesson.id, lesson.title, lesson.duration, lesson.difficulty)
}
