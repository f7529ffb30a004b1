use std::borrow::Cow;

mod demo {
    use std::borrow::Cow;

    #[skalable_derive::skalable_error]
    pub enum DemoError {
        #[error("IO error{}: {source}", format_context(.context))]
        Io { source: std::io::Error, context: Option<Cow<'static, str>> },

        #[error("Internal error{}: {message}", format_context(.context))]
        Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    }
}

use demo::{DemoError, DemoErrorExt};

fn io_failure() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), DemoError> {
        io_failure()?;
        Ok(())
    }

    let err = run().expect_err("io failure should propagate");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: missing");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = io_failure().context("reading stylesheet").expect_err("io failure");
    assert_eq!(err.to_string(), "IO error (reading stylesheet): missing");
}

#[test]
fn context_overrides_existing_error_context() {
    let result: Result<(), DemoError> = Err("boom".into());
    let err = result.context("mounting").expect_err("internal failure");

    match err {
        DemoError::Internal { message, context } => {
            assert_eq!(message, Cow::Borrowed("boom"));
            assert_eq!(context.as_deref(), Some("mounting"));
        },
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn owned_strings_become_internal_errors() {
    let err = DemoError::from(format!("root {} missing", "app"));
    assert_eq!(err.to_string(), "Internal error: root app missing");
}
