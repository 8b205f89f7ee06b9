//! Error context extension tests

use ordo_domain::Error;
use ordo_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::other("disk full"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing_io().context("Saving snapshot").unwrap_err();
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Saving snapshot: disk full"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("Writing config").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_context() {
    let err = "not a number"
        .parse::<u32>()
        .config_context("Reading catalog.start")
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Reading catalog.start"));
}

#[test]
fn test_injection_context_keeps_dill_error() {
    trait Missing: Send + Sync {}

    let err = dill::CatalogBuilder::new()
        .build()
        .get_one::<dyn Missing>()
        .map(|_| ())
        .injection_context("Resolving plugins")
        .unwrap_err();
    assert!(matches!(err, Error::Injection { .. }));
    assert!(err.to_string().contains("Resolving plugins"));
    assert!(std::error::Error::source(&err).is_some());
}
