use academy::domain::config::AppConfig;
use academy::landing::write_page;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Validates the catalog, then writes the rendered page.
///
/// # Result
/// Returns the path that was written.
///
/// # Errors
/// Returns an error if the catalog has validation errors or the file cannot be written.
pub fn render_page(cfg: &AppConfig, out: Option<&Path>) -> Result<PathBuf> {
    let catalog = academy::init(false).context("Refusing to render an invalid catalog")?;

    let path = out.map_or_else(|| cfg.storage.output_dir.join(INDEX_FILE), Path::to_path_buf);
    write_page(&path, &catalog, &cfg.site)?;

    println!("✅ Wrote {}", path.display());
    Ok(path)
}
