use skalable_style::StyleError;
use std::borrow::Cow;

#[skalable_derive::skalable_error]
pub enum PageError {
    /// Global style injection failed.
    #[error("Style error{}: {source}", format_context(.context))]
    Style { source: StyleError, context: Option<Cow<'static, str>> },

    /// The document has no element with the configured root id.
    #[error("Root element '{root_id}' not found{}", format_context(.context))]
    RootNotFound { root_id: String, context: Option<Cow<'static, str>> },

    /// The host environment (window, document) is unusable.
    #[error("Page host error{}: {message}", format_context(.context))]
    Host { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
