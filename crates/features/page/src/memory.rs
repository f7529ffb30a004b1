use crate::component::render_to_string;
use crate::error::PageError;
use crate::host::{Mount, PageHost};
use dioxus::prelude::*;
use skalable_domain::config::PageConfig;
use skalable_domain::constants::PAGE_TITLE;
use skalable_style::{StyleError, StyleHost};
use tracing::debug;

/// A `<style id=..>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

/// A `<div id=..>` in the document body and its rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub html: String,
}

/// An in-process HTML document.
///
/// Starts empty; add the containers the page expects with
/// [`MemoryDocument::with_container`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    title: String,
    styles: Vec<StyleElement>,
    containers: Vec<Container>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self { title: PAGE_TITLE.to_owned(), styles: Vec::new(), containers: Vec::new() }
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds an empty `<div>` with the given id.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.push(Container { id: id.into(), html: String::new() });
        self
    }

    #[must_use]
    pub fn styles(&self) -> &[StyleElement] {
        &self.styles
    }

    #[must_use]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Serialises the whole document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut dom = VirtualDom::new_with_props(
            DocumentShell,
            DocumentShellProps { document: self.clone() },
        );
        dom.rebuild_in_place();
        format!("<!DOCTYPE html>\n{}\n", dioxus_ssr::render(&dom))
    }
}

/// `<html>` skeleton around the injected sheets and mounted containers.
#[component]
fn DocumentShell(document: MemoryDocument) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "{document.title}" }
                for sheet in document.styles.iter() {
                    style {
                        key: "{sheet.id}",
                        id: "{sheet.id}",
                        dangerous_inner_html: "{sheet.css}",
                    }
                }
            }
            body {
                for container in document.containers.iter() {
                    div {
                        key: "{container.id}",
                        id: "{container.id}",
                        dangerous_inner_html: "{container.html}",
                    }
                }
            }
        }
    }
}

impl StyleHost for MemoryDocument {
    fn has_global_style(&self, id: &str) -> bool {
        self.styles.iter().any(|s| s.id == id)
    }

    fn insert_global_style(&mut self, id: &str, css: &str) -> Result<(), StyleError> {
        self.styles.push(StyleElement { id: id.to_owned(), css: css.to_owned() });
        Ok(())
    }
}

impl PageHost for MemoryDocument {
    fn mount(&mut self, root_id: &str, page: &PageConfig) -> Result<Mount, PageError> {
        let container = self.containers.iter_mut().find(|c| c.id == root_id).ok_or_else(|| {
            PageError::RootNotFound { root_id: root_id.to_owned(), context: None }
        })?;

        if !container.html.is_empty() {
            return Ok(Mount::AlreadyMounted);
        }

        container.html = render_to_string(page);
        debug!(root = root_id, bytes = container.html.len(), "page mounted");
        Ok(Mount::Rendered)
    }
}
