use std::error::Error;
use std::io;

use chain_rail::{EmptyReductionError, ErrorKind, Panicked, TransformError};

#[test]
fn transform_error_records_kind_of_source() {
    let err = TransformError::new(io::Error::new(io::ErrorKind::NotFound, "config.toml"));

    assert_eq!(err.kind(), ErrorKind::of::<io::Error>());
    assert!(err.is::<io::Error>());
    assert!(!err.is::<EmptyReductionError>());
    assert_eq!(err.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    assert_eq!(err.to_string(), "config.toml");
}

#[test]
fn transform_error_kinds_for_string_sources() {
    let from_str = TransformError::new("boom");
    let from_string = TransformError::new(String::from("boom"));

    assert_eq!(from_str.kind(), ErrorKind::of_type::<&str>());
    assert_eq!(from_string.kind(), ErrorKind::of_type::<String>());
    assert_ne!(from_str, from_string);
    assert_eq!(from_str.to_string(), from_string.to_string());
}

#[test]
fn transform_error_context_is_lifo() {
    let err = TransformError::new(EmptyReductionError)
        .with_context("loading")
        .with_context(String::from("summing totals"));

    assert_eq!(err.context().collect::<Vec<_>>(), vec!["summing totals", "loading"]);
    assert_eq!(
        err.error_chain(),
        "summing totals -> loading -> reduce of empty sequence with no initial value"
    );
}

#[test]
fn transform_error_equality_ignores_context() {
    let plain = TransformError::new(EmptyReductionError);
    let annotated = TransformError::new(EmptyReductionError).with_context("ctx");

    assert_eq!(plain, annotated);
}

#[test]
fn transform_error_exposes_source() {
    let err = TransformError::new(Panicked::new("kaboom"));

    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("kaboom"));
    assert_eq!(err.inner().to_string(), "kaboom");
    assert!(err.into_inner().downcast_ref::<Panicked>().is_some());
}

#[test]
fn error_kind_names_the_type() {
    let kind = ErrorKind::of::<EmptyReductionError>();

    assert!(kind.name().ends_with("EmptyReductionError"));
    assert_eq!(kind.to_string(), kind.name());
    assert!(kind.is_any_of(&[ErrorKind::of::<io::Error>(), kind]));
    assert!(!kind.is_any_of(&[]));
}

#[test]
fn panicked_and_empty_reduction_messages() {
    assert_eq!(Panicked::new("oops").to_string(), "oops");
    assert_eq!(Panicked::new("oops").message(), "oops");
    assert_eq!(
        EmptyReductionError.to_string(),
        "reduce of empty sequence with no initial value"
    );
}
