//! Browser host, compiled for `wasm32` only.

use crate::bootstrap::bootstrap;
use crate::component::App;
use crate::error::PageError;
use crate::host::{Mount, PageHost};
use dioxus::LaunchBuilder;
use skalable_domain::config::PageConfig;
use skalable_style::{StyleError, StyleHost};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document};

/// The Dioxus web renderer can only be launched once per page.
static LAUNCHED: AtomicBool = AtomicBool::new(false);

/// The live `window.document`.
#[derive(Debug)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    /// # Errors
    /// [`PageError::Host`] outside a window context (e.g. a worker).
    pub fn current() -> Result<Self, PageError> {
        let document = web_sys::window().and_then(|window| window.document()).ok_or_else(|| {
            PageError::Host { message: "no window.document available".into(), context: None }
        })?;
        Ok(Self { document })
    }
}

impl StyleHost for BrowserDocument {
    fn has_global_style(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert_global_style(&mut self, id: &str, css: &str) -> Result<(), StyleError> {
        let head = self.document.head().ok_or_else(|| StyleError::Host {
            message: "document has no <head>".into(),
            context: None,
        })?;

        let style = self.document.create_element("style").map_err(|e| StyleError::Host {
            message: js_message(&e).into(),
            context: Some("creating <style>".into()),
        })?;
        style.set_id(id);
        style.set_text_content(Some(css));

        head.append_child(&style).map_err(|e| StyleError::Host {
            message: js_message(&e).into(),
            context: Some("appending <style> to <head>".into()),
        })?;
        Ok(())
    }
}

impl PageHost for BrowserDocument {
    fn mount(&mut self, root_id: &str, page: &PageConfig) -> Result<Mount, PageError> {
        if self.document.get_element_by_id(root_id).is_none() {
            return Err(PageError::RootNotFound { root_id: root_id.to_owned(), context: None });
        }
        if LAUNCHED.swap(true, Ordering::SeqCst) {
            return Ok(Mount::AlreadyMounted);
        }

        LaunchBuilder::web()
            .with_cfg(dioxus::web::Config::new().rootname(root_id))
            .with_context(page.clone())
            .launch(App);

        debug!(root = root_id, "web renderer launched");
        Ok(Mount::Rendered)
    }
}

/// Runs [`bootstrap`] once the page has finished loading.
///
/// When the `load` event has already fired, bootstrap runs immediately.
/// Failures are logged; nothing is retried.
///
/// # Errors
/// [`PageError::Host`] when there is no window or the listener cannot be attached.
pub fn register_on_load(page: PageConfig) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Host {
        message: "no window available".into(),
        context: None,
    })?;

    let loaded = window.document().is_some_and(|document| document.ready_state() == "complete");
    if loaded {
        run(&page);
        return Ok(());
    }

    let callback = Closure::once_into_js(move || run(&page));
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| PageError::Host {
            message: js_message(&e).into(),
            context: Some("registering load listener".into()),
        })
}

fn run(page: &PageConfig) {
    match BrowserDocument::current().and_then(|mut document| bootstrap(&mut document, page)) {
        Ok(report) => info!(?report, "page loaded"),
        Err(err) => error!(%err, "page bootstrap failed"),
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
