//! Native prerender of the Skalable page.
//!
//! Bootstraps the page into an in-memory document and writes the resulting
//! HTML, head stylesheet included, to disk.

mod error;

pub use crate::error::{RenderError, RenderErrorExt};

use skalable::domain::config::{AppConfig, LoggingConfig};
use skalable::page::{MemoryDocument, bootstrap};
use skalable_logger::Logger;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Renders the full HTML document for `config.page`.
///
/// # Errors
/// [`RenderError::Page`] when bootstrapping fails.
pub fn render_page(config: &AppConfig) -> Result<String, RenderError> {
    let page = &config.page;
    let mut document =
        MemoryDocument::new().with_title(page.title.as_str()).with_container(page.root_id.as_str());

    bootstrap(&mut document, page).context("bootstrapping in-memory document")?;
    Ok(document.to_html())
}

/// Renders the page and writes it to `config.render.output`, creating parent
/// directories as needed. Returns the written path.
///
/// # Errors
/// [`RenderError::Page`] from rendering, [`RenderError::Io`] from the filesystem.
pub fn write_page(config: &AppConfig) -> Result<PathBuf, RenderError> {
    let html = render_page(config)?;
    let output = &config.render.output;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("creating {}", parent.display()))?;
    }
    fs::write(output, &html).context(format!("writing {}", output.display()))?;

    info!(output = %output.display(), bytes = html.len(), "page written");
    Ok(output.clone())
}

/// Installs the global subscriber described by `logging`.
///
/// # Errors
/// [`RenderError::Logger`] when the subscriber cannot be installed.
pub fn init_logger(name: &str, logging: &LoggingConfig) -> Result<Logger, RenderError> {
    let mut builder = Logger::builder(name).env_filter(logging.filter.as_str()).json(logging.json);
    if let Some(directory) = &logging.directory {
        builder = builder.directory(directory);
    }
    Ok(builder.init()?)
}
