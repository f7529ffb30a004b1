use crate::error::StyleError;
use crate::global::global_styles;
use crate::sheet::StyleSheet;
use tracing::{debug, trace};

/// The document a stylesheet is injected into.
///
/// Sheets are keyed by id; hosts usually back this with a `<style id=..>`
/// element in the document head.
pub trait StyleHost {
    fn has_global_style(&self, id: &str) -> bool;

    /// Inserts `css` under `id`. Callers check [`StyleHost::has_global_style`] first.
    ///
    /// # Errors
    /// Implementation specific; typically [`StyleError::Host`].
    fn insert_global_style(&mut self, id: &str, css: &str) -> Result<(), StyleError>;
}

/// Outcome of an injection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    Inserted,
    AlreadyPresent,
}

/// Injects `sheet` into `host` unless a sheet with the same name is already there.
///
/// # Errors
/// Propagates the host's insertion error.
pub fn inject_global<H>(host: &mut H, sheet: &StyleSheet) -> Result<Injection, StyleError>
where
    H: StyleHost + ?Sized,
{
    if host.has_global_style(sheet.name()) {
        trace!(sheet = sheet.name(), "global style already present");
        return Ok(Injection::AlreadyPresent);
    }

    let css = sheet.render();
    host.insert_global_style(sheet.name(), &css)?;
    debug!(sheet = sheet.name(), bytes = css.len(), "global style injected");

    Ok(Injection::Inserted)
}

/// Injects the page's [`global_styles`].
///
/// # Errors
/// Propagates the host's insertion error.
pub fn apply_global_style<H>(host: &mut H) -> Result<Injection, StyleError>
where
    H: StyleHost + ?Sized,
{
    inject_global(host, global_styles())
}
