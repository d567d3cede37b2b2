use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the server and the CLI.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub storage: StorageConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Page branding: everything the landing page shows that is not catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub motto: String,
    /// `lang` attribute of the document.
    pub lang: String,
    /// Optional stylesheet URL linked from the document head.
    pub stylesheet: Option<String>,
    /// Outbound links shown in the footer, in order.
    pub links: Vec<SiteLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteLink {
    pub label: String,
    pub url: String,
}

/// Filesystem roots.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Served under `/static`.
    pub static_dir: PathBuf,
    /// Where `academy render` writes `index.html`.
    pub output_dir: PathBuf,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Fine-Tuning Academy".to_owned(),
            tagline: "Learn AI Like a Friend is Teaching You".to_owned(),
            motto: "Free • Interactive • Actually Fun • Zero BS".to_owned(),
            lang: "en".to_owned(),
            stylesheet: None,
            links: vec![
                SiteLink::new("GitHub", "https://github.com/gouthamgo/FineTuning"),
                SiteLink::new("HuggingFace", "https://huggingface.co"),
                SiteLink::new("Google Colab", "https://colab.research.google.com"),
            ],
        }
    }
}

impl SiteLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), url: url.into() }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public"), output_dir: PathBuf::from("dist") }
    }
}
