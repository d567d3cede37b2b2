use academy::catalog::{Catalog, Severity};
use anyhow::Result;

/// Prints every validation finding followed by a summary line.
///
/// # Errors
/// Returns an error if the catalog has errors, or any warnings while `strict` is set.
pub fn validate_catalog(strict: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let report = catalog.validate();

    for issue in report.issues() {
        match issue.severity() {
            Severity::Error => println!("❌ error: {issue}"),
            Severity::Warning => println!("⚠️ warning: {issue}"),
        }
    }

    let stats = catalog.stats();
    if report.is_clean() {
        println!("✅ Catalog is valid ({} modules, {} lessons)", stats.modules, stats.lessons);
    } else {
        println!(
            "ℹ️ {} error(s), {} warning(s) in {} lessons",
            report.errors().count(),
            report.warnings().count(),
            stats.lessons
        );
    }

    report.into_result(strict)?;
    Ok(())
}
