use crate::constants::{DEFAULT_OUTPUT, LOGO_ALT, LOGO_SRC, PAGE_TITLE, ROOT_ELEMENT_ID};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a Skalable binary reads at startup.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub page: PageConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped [`AppConfigInner`], cheap to clone into subsystems.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
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

/// What the page mounts and where.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub root_id: String,
    pub title: String,
    pub logo: LogoConfig,
}

/// The single image rendered into the root container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub alt: String,
    pub src: String,
}

/// Native prerender output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directive string, e.g. `"info,skalable_page=debug"`.
    pub filter: String,
    pub json: bool,
    /// When set, logs are also written to rolling files here.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            root_id: ROOT_ELEMENT_ID.to_owned(),
            title: PAGE_TITLE.to_owned(),
            logo: LogoConfig::default(),
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self { alt: LOGO_ALT.to_owned(), src: LOGO_SRC.to_owned() }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { output: PathBuf::from(DEFAULT_OUTPUT) }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_owned(), json: false, directory: None }
    }
}
