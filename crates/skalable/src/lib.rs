//! Facade crate for the Skalable page.
//! Re-exports the domain, kernel and feature crates under one path.
//! Keep this crate thin: it composes other crates, it does not implement logic.

pub use skalable_domain as domain;
pub use skalable_kernel as kernel;
pub use skalable_page as page;
pub use skalable_style as style;

