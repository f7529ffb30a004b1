//! Browser entry point for the Skalable page.
//!
//! Build for `wasm32-unknown-unknown` and serve next to an `index.html` that
//! contains `<div id="root"></div>`.

use skalable_page::PageError;
use skalable_page::domain::config::PageConfig;

#[derive(Debug, Default)]
pub struct WebApp {
    page: PageConfig,
}

impl WebApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(mut self, root_id: impl Into<String>) -> Self {
        self.page.root_id = root_id.into();
        self
    }

    #[must_use]
    pub fn with_logo(mut self, alt: impl Into<String>, src: impl Into<String>) -> Self {
        self.page.logo.alt = alt.into();
        self.page.logo.src = src.into();
        self
    }

    #[must_use]
    pub const fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Installs the browser logger and schedules the bootstrap for page load.
    ///
    /// # Errors
    /// Returns [`PageError::Host`] when the load listener cannot be attached.
    #[cfg(target_arch = "wasm32")]
    pub fn launch(self) -> Result<(), PageError> {
        dioxus::logger::initialize_default();
        skalable_page::browser::register_on_load(self.page)
    }

    /// Native builds have no document to attach to.
    ///
    /// # Errors
    /// Always returns [`PageError::Host`]; use `skalable-render` for native output.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn launch(self) -> Result<(), PageError> {
        Err(PageError::Host {
            message: "the web app needs a browser, build it for wasm32 or use skalable-render"
                .into(),
            context: None,
        })
    }
}
