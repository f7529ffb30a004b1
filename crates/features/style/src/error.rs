use std::borrow::Cow;

#[skalable_derive::skalable_error]
pub enum StyleError {
    /// The document refused the stylesheet.
    #[error("Style host error{}: {message}", format_context(.context))]
    Host { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
