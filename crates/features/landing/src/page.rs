use crate::components::{FeaturedSection, Footer, Hero, Highlights, ModuleSection, QuickStart};
use crate::error::{RenderError, RenderErrorExt};
use academy_catalog::Catalog;
use academy_domain::Lesson;
use academy_domain::config::SiteConfig;
use dioxus::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Renders the complete landing page document.
///
/// The `Page` component yields `<head>` and `<body>`; the doctype and the `<html>`
/// shell are written around it here.
///
/// Pure and deterministic: the same catalog and site configuration always
/// produce the same bytes. All interpolated text is HTML-escaped.
#[must_use]
pub fn render_page(catalog: &Catalog, site: &SiteConfig) -> String {
    let body =
        dioxus_ssr::render_element(rsx! { Page { catalog: *catalog, site: site.clone() } });
    debug!(bytes = body.len(), "Rendered landing page");
    format!("{DOCTYPE}\n<html lang=\"{}\">{body}</html>", escape_attribute(&site.lang))
}

/// Escapes a value for a double-quoted attribute, using the numeric entities
/// `dioxus-ssr` emits for the rest of the document.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&#38;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&#60;"),
            '>' => escaped.push_str("&#62;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the page and writes it to `path`, creating parent directories.
///
/// # Errors
/// Returns [`RenderError::Internal`] if `path` names no file, and
/// [`RenderError::Io`] if the directory or file cannot be written.
pub fn write_page(
    path: impl AsRef<Path>,
    catalog: &Catalog,
    site: &SiteConfig,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        return Err(RenderError::Internal {
            message: "Output path has no file name".into(),
            context: Some(path.display().to_string().into()),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        RenderErrorExt::context(fs::create_dir_all(parent), "Failed to create output directory")?;
    }

    let html = render_page(catalog, site);
    RenderErrorExt::context(fs::write(path, &html), "Failed to write page")?;
    info!("Wrote landing page to {} ({} bytes)", path.display(), html.len());

    Ok(())
}

#[component]
fn Page(catalog: Catalog, site: SiteConfig) -> Element {
    let featured: Vec<Lesson> = catalog.featured_lessons().into_iter().copied().collect();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            meta { name: "description", content: "{site.tagline}" }
            title { "{site.title}" }
            if let Some(href) = &site.stylesheet {
                link { rel: "stylesheet", href: "{href}" }
            }
        }
        body {
            main { class: "container",
                Hero {
                    title: site.title.clone(),
                    tagline: site.tagline.clone(),
                    motto: site.motto.clone(),
                }
                Highlights {}
                QuickStart {}
                if !featured.is_empty() {
                    FeaturedSection { lessons: featured }
                }
                section { class: "all-lessons", id: "lessons",
                    h2 { "📚 All Lessons" }
                    for module in catalog.modules() {
                        ModuleSection { key: "{module.key}", module: *module }
                    }
                }
            }
            Footer { links: site.links.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::escape_attribute;

    #[test]
    fn attribute_escaping_covers_quotes_and_markup() {
        assert_eq!(escape_attribute("en-GB"), "en-GB");
        assert_eq!(escape_attribute(r#"x" onload="y"#), "x&#34; onload=&#34;y");
        assert_eq!(escape_attribute("<a & 'b'>"), "&#60;a &#38; &#39;b&#39;&#62;");
    }
}
