use crate::error::PageError;
use skalable_domain::config::PageConfig;
use skalable_style::StyleHost;

/// A document the page can be bootstrapped into.
pub trait PageHost: StyleHost {
    /// Renders the page's [`App`](crate::App) into the element `root_id`.
    ///
    /// Mounting twice leaves the first render in place.
    ///
    /// # Errors
    /// [`PageError::RootNotFound`] when no element carries `root_id`, or a
    /// host specific error.
    fn mount(&mut self, root_id: &str, page: &PageConfig) -> Result<Mount, PageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    Rendered,
    AlreadyMounted,
}
