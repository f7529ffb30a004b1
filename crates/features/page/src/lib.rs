//! # Page
//!
//! Boots the Skalable page: injects the global stylesheet, then mounts the
//! logo into the root container.
//!
//! The document is reached through [`PageHost`]. Two hosts ship here:
//!
//! * [`MemoryDocument`], an in-process document rendered with `dioxus-ssr`,
//!   used by tests and the native prerender.
//! * `BrowserDocument` (wasm32 only), backed by `web-sys` and the Dioxus web
//!   renderer; see `browser::register_on_load`.
//!
//! ## Example
//!
//! ```rust
//! use skalable_page::{MemoryDocument, Mount, bootstrap};
//! use skalable_page::domain::config::PageConfig;
//!
//! let page = PageConfig::default();
//! let mut document = MemoryDocument::new().with_container(&page.root_id);
//! let report = bootstrap(&mut document, &page).unwrap();
//! assert_eq!(report.mount, Mount::Rendered);
//! ```

mod bootstrap;
#[cfg(target_arch = "wasm32")]
pub mod browser;
mod component;
mod error;
mod host;
mod memory;

pub use crate::bootstrap::{BootstrapReport, bootstrap};
pub use crate::component::{App, Logo, render_to_string};
pub use crate::error::{PageError, PageErrorExt};
pub use crate::host::{Mount, PageHost};
pub use crate::memory::{Container, MemoryDocument, StyleElement};
pub use skalable_domain as domain;
pub use skalable_style as style;
