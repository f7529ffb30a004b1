use crate::error::{PageError, PageErrorExt};
use crate::host::{Mount, PageHost};
use skalable_domain::config::PageConfig;
use skalable_style::{Injection, apply_global_style};
use tracing::{info, instrument};

/// What a bootstrap run changed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub style: Injection,
    pub mount: Mount,
}

/// Applies the global stylesheet, then mounts the page into `page.root_id`.
///
/// Safe to call more than once: a second run finds the stylesheet and the
/// rendered root already in place and changes nothing.
///
/// # Errors
/// * [`PageError::Style`] when the stylesheet cannot be inserted.
/// * [`PageError::RootNotFound`] when the root container is missing; the
///   stylesheet stays injected.
#[instrument(skip(host, page), fields(root = %page.root_id))]
pub fn bootstrap<H>(host: &mut H, page: &PageConfig) -> Result<BootstrapReport, PageError>
where
    H: PageHost + ?Sized,
{
    let style = apply_global_style(host).context("applying global style")?;
    let mount = host.mount(&page.root_id, page)?;

    info!(?style, ?mount, "page bootstrapped");
    Ok(BootstrapReport { style, mount })
}
