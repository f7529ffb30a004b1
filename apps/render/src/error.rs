use skalable::kernel::config::ConfigError;
use skalable::page::PageError;
use skalable_logger::LoggerError;
use std::borrow::Cow;

#[skalable_derive::skalable_error]
pub enum RenderError {
    #[error("Page error{}: {source}", format_context(.context))]
    Page { source: PageError, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },
}
