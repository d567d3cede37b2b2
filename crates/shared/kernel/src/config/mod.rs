use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Base name looked up in the working directory when no path is given
/// (`academy.toml`, `academy.yaml`, `academy.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "academy";
/// Prefix of environment overrides, e.g. `ACADEMY__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "ACADEMY";

/// Custom error type for config loading.
#[academy_derive::academy_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration object from a file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **File**: `path` when given (must exist; format from the extension), otherwise the
///    optional [`DEFAULT_CONFIG_NAME`] file in the working directory.
/// 2. **Environment**: variables prefixed with `ACADEMY__`, nested with `__`
///    (`ACADEMY__SITE__TITLE` maps to `site.title`).
///
/// Fields missing from every layer fall back to the `serde` defaults of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or if the
/// merged values do not match `T`.
///
/// # Example
/// ```rust
/// use academy_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ToolConfig {
///     port: u16,
/// }
///
/// let cfg: ToolConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            let path = path.as_ref();
            info!("Loading config from {}", path.display());
            File::from(path).required(true)
        },
        None => {
            debug!("No config path given, looking for optional '{DEFAULT_CONFIG_NAME}' file");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
